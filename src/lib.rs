//! Northwind catalog service
//!
//! Four operations over the Northwind `products` and `suppliers` tables,
//! served over HTTP.
//!
//! # Modules
//!
//! - [`catalog`] - Entities, the data-access trait, its Postgres and memory
//!   backends, the operations and their dispatcher
//! - [`gateway`] - axum routes, handlers, error mapping and OpenAPI docs
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use catalog::{
    CatalogError, CatalogService, CatalogStore, Dispatcher, Invocation, MemoryCatalog, Operation,
    Outcome, PgCatalog, Product, Supplier,
};
pub use config::AppConfig;
pub use gateway::{build_router, state::AppState};
