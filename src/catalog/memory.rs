//! In-memory catalog backend
//!
//! Rows live in `DashMap`s keyed by primary key. A `get_mut` guard holds the
//! row's shard lock, which makes each read-modify-write atomic.

use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use serde::Deserialize;
use std::path::Path;

use super::error::CatalogError;
use super::models::{Page, Product, ProductId, Supplier, SupplierId};
use super::store::{CatalogStore, mark_discontinued, remaining_stock};

/// Seed data for the memory backend
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: DashMap<ProductId, Product>,
    suppliers: DashMap<SupplierId, Supplier>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(
        products: impl IntoIterator<Item = Product>,
        suppliers: impl IntoIterator<Item = Supplier>,
    ) -> Self {
        let catalog = Self::new();
        for product in products {
            catalog.insert_product(product);
        }
        for supplier in suppliers {
            catalog.insert_supplier(supplier);
        }
        catalog
    }

    /// Load a JSON fixture of the form `{"products": [...], "suppliers": [...]}`
    pub fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture: {}", path.display()))?;
        let fixture: CatalogFixture = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fixture: {}", path.display()))?;

        tracing::info!(
            products = fixture.products.len(),
            suppliers = fixture.suppliers.len(),
            "Loaded catalog fixture from {}",
            path.display()
        );
        Ok(Self::with_rows(fixture.products, fixture.suppliers))
    }

    /// Insert or replace a product row
    pub fn insert_product(&self, product: Product) {
        self.products.insert(product.product_id, product);
    }

    /// Insert or replace a supplier row
    pub fn insert_supplier(&self, supplier: Supplier) {
        self.suppliers.insert(supplier.supplier_id, supplier);
    }

    pub fn remove_product(&self, id: ProductId) -> Option<Product> {
        self.products.remove(&id).map(|(_, product)| product)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.get(&id).map(|row| row.value().clone()))
    }

    async fn products(&self, page: Page) -> Result<Vec<Product>, CatalogError> {
        let mut rows: Vec<Product> = self
            .products
            .iter()
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by_key(|p| p.product_id);
        Ok(rows
            .into_iter()
            .skip(page.offset as usize)
            .take(page.effective_limit() as usize)
            .collect())
    }

    async fn supplier(&self, id: SupplierId) -> Result<Option<Supplier>, CatalogError> {
        Ok(self.suppliers.get(&id).map(|row| row.value().clone()))
    }

    async fn max_product_id(&self) -> Result<Option<ProductId>, CatalogError> {
        Ok(self.products.iter().map(|row| *row.key()).max())
    }

    async fn deduct_stock(
        &self,
        id: ProductId,
        quantity: i32,
    ) -> Result<Option<i32>, CatalogError> {
        let Some(mut row) = self.products.get_mut(&id) else {
            return Ok(None);
        };
        let new_stock = remaining_stock(row.units_in_stock, quantity)?;
        row.units_in_stock = new_stock;
        Ok(Some(new_stock))
    }

    async fn discontinue(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.get_mut(&id).map(|mut row| {
            mark_discontinued(&mut row);
            row.value().clone()
        }))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(id: ProductId, units_in_stock: i32) -> Product {
        Product {
            product_id: id,
            product_name: format!("Product {}", id),
            supplier_id: Some(1),
            category_id: Some(2),
            quantity_per_unit: Some("12 - 550 ml bottles".to_string()),
            unit_price: Some(rust_decimal::Decimal::new(1900, 2)),
            units_in_stock,
            units_on_order: 10,
            reorder_level: 5,
            discontinued: false,
        }
    }

    pub fn baker_street() -> Supplier {
        Supplier {
            supplier_id: 3,
            company_name: "Grandma Kelly's Homestead".to_string(),
            contact_name: Some("Regina Murphy".to_string()),
            address: Some("221B Baker St".to_string()),
            city: Some("London".to_string()),
            region: None,
            postal_code: Some("NW16XE".to_string()),
            country: Some("UK".to_string()),
            phone: Some("(171) 555-2222".to_string()),
        }
    }

    /// Products 1..=n, each with 20 units in stock
    pub fn catalog(n: ProductId) -> MemoryCatalog {
        MemoryCatalog::with_rows((1..=n).map(|id| product(id, 20)), [baker_street()])
    }
}
