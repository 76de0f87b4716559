//! Catalog data access
//!
//! The four catalog operations only ever need point reads by key, one
//! aggregate (`max(ProductID)`) and two point updates. Backends implement
//! exactly that, and each write is atomic with respect to the read it
//! depends on.

use async_trait::async_trait;

use super::error::CatalogError;
use super::models::{Page, Product, ProductId, Supplier, SupplierId};

/// Data-access seam injected into [`super::service::CatalogService`]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Get product by ID
    async fn product(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;

    /// Products ordered by ID
    async fn products(&self, page: Page) -> Result<Vec<Product>, CatalogError>;

    /// Get supplier by ID
    async fn supplier(&self, id: SupplierId) -> Result<Option<Supplier>, CatalogError>;

    /// Highest existing product ID, `None` when the table is empty
    async fn max_product_id(&self) -> Result<Option<ProductId>, CatalogError>;

    /// Subtract `quantity` from `UnitsInStock` and return the new value.
    ///
    /// The read and the write must not interleave with another writer on the
    /// same row. Returns `None` if the product does not exist.
    async fn deduct_stock(
        &self,
        id: ProductId,
        quantity: i32,
    ) -> Result<Option<i32>, CatalogError>;

    /// Zero stock and on-order counts, set the discontinued flag and return
    /// the updated row. Returns `None` if the product does not exist.
    async fn discontinue(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;
}

/// Stock left after taking `quantity`. Negative results are allowed.
pub fn remaining_stock(stock: i32, quantity: i32) -> Result<i32, CatalogError> {
    stock
        .checked_sub(quantity)
        .ok_or(CatalogError::StockOverflow { stock, quantity })
}

/// Apply the discontinue transition to an in-memory row
pub fn mark_discontinued(product: &mut Product) {
    product.units_in_stock = 0;
    product.units_on_order = 0;
    product.discontinued = true;
}
