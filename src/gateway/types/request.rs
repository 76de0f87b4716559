//! Request bodies

use serde::Deserialize;
use utoipa::ToSchema;

use crate::catalog::ProductId;

/// `submitOrder` payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitOrderRequest {
    /// Product to take stock from
    #[schema(value_type = i32, example = 7)]
    pub product: ProductId,
    /// Units ordered; may exceed the stock on hand
    #[schema(example = 5)]
    pub quantity: i32,
}
