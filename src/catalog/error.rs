use thiserror::Error;

use super::models::{ProductId, SupplierId};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("Supplier {0} not found")]
    SupplierNotFound(SupplierId),

    #[error("No product with id {0}")]
    NoProductAt(ProductId),

    #[error("Catalog has no products")]
    CatalogEmpty,

    #[error("Stock overflow: {stock} - {quantity} is out of range")]
    StockOverflow { stock: i32, quantity: i32 },
}
