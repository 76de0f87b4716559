//! Catalog operations
//!
//! - `submit_order`: take stock from a product, return what is left
//! - `discontinue`: retire a product
//! - `random_product`: uniform pick over `[1, max(ProductID)]`
//! - `address_line`: one-line supplier address

use rand::Rng;
use std::sync::Arc;

use super::error::CatalogError;
use super::models::{Page, Product, ProductId, Supplier, SupplierId};
use super::store::CatalogStore;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// Deduct `quantity` from the product's stock and return the new stock.
    ///
    /// There is no floor: ordering more than is in stock leaves a negative
    /// count.
    pub async fn submit_order(
        &self,
        product: ProductId,
        quantity: i32,
    ) -> Result<i32, CatalogError> {
        let new_stock = self
            .store
            .deduct_stock(product, quantity)
            .await?
            .ok_or(CatalogError::ProductNotFound(product))?;

        if new_stock < 0 {
            tracing::warn!(product, quantity, new_stock, "Stock went negative");
        }
        tracing::info!(product, quantity, new_stock, "Order submitted");
        Ok(new_stock)
    }

    pub async fn discontinue(&self, product: ProductId) -> Result<Product, CatalogError> {
        let row = self
            .store
            .discontinue(product)
            .await?
            .ok_or(CatalogError::ProductNotFound(product))?;

        tracing::info!(product, "Product discontinued");
        Ok(row)
    }

    pub async fn random_product(&self) -> Result<Product, CatalogError> {
        let max = self.max_product_id().await?;
        // ThreadRng is !Send, keep it out of the await
        let id = {
            let mut rng = rand::thread_rng();
            draw_product_id(&mut rng, max)
        };
        self.product_at(id).await
    }

    /// Same as [`Self::random_product`] with a caller-supplied RNG
    pub async fn random_product_with<R: Rng + Send>(
        &self,
        rng: &mut R,
    ) -> Result<Product, CatalogError> {
        let max = self.max_product_id().await?;
        let id = draw_product_id(rng, max);
        self.product_at(id).await
    }

    pub async fn address_line(&self, supplier: SupplierId) -> Result<String, CatalogError> {
        Ok(self.supplier(supplier).await?.address_line())
    }

    pub async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.store
            .product(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    pub async fn products(&self, page: Page) -> Result<Vec<Product>, CatalogError> {
        self.store.products(page).await
    }

    pub async fn supplier(&self, id: SupplierId) -> Result<Supplier, CatalogError> {
        self.store
            .supplier(id)
            .await?
            .ok_or(CatalogError::SupplierNotFound(id))
    }

    async fn max_product_id(&self) -> Result<ProductId, CatalogError> {
        match self.store.max_product_id().await? {
            Some(max) if max >= 1 => Ok(max),
            _ => Err(CatalogError::CatalogEmpty),
        }
    }

    async fn product_at(&self, id: ProductId) -> Result<Product, CatalogError> {
        // Ids below max may have been deleted
        self.store
            .product(id)
            .await?
            .ok_or(CatalogError::NoProductAt(id))
    }
}

/// Uniform draw over `[1, max]`. `max` must be at least 1.
pub fn draw_product_id<R: Rng + ?Sized>(rng: &mut R, max: ProductId) -> ProductId {
    rng.gen_range(1..=max)
}
