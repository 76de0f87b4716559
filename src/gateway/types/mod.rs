//! Gateway types module
//!
//! ## Submodules
//! - [`request`]: Request bodies
//! - [`response`]: Response envelope and error codes

pub mod request;
pub mod response;

pub use request::SubmitOrderRequest;
pub use response::{ApiResponse, error_codes};
