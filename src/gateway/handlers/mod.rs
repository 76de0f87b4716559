//! Gateway handlers
//!
//! - [`health`]: liveness and dependency check
//! - [`catalog`]: catalog operations and entity reads

pub mod catalog;
pub mod health;

pub use catalog::{
    address_line, discontinue, get_product, get_supplier, list_operations, list_products,
    random_product, submit_order,
};
pub use health::{HealthResponse, health_check};
