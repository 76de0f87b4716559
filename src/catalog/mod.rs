//! Northwind catalog: products, suppliers and the operations over them

pub mod dispatch;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod service;
pub mod store;

pub use dispatch::{Dispatcher, Invocation, Operation, OperationInfo, Outcome};
pub use error::CatalogError;
pub use memory::MemoryCatalog;
pub use models::{Page, Product, ProductId, Supplier, SupplierId};
pub use postgres::PgCatalog;
pub use service::CatalogService;
pub use store::CatalogStore;
