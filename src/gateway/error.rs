//! HTTP error mapping.
//!
//! Every failure leaves the gateway as an [`ApiResponse`] envelope with a
//! non-zero code.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::types::{ApiResponse, error_codes};
use crate::catalog::CatalogError;

/// API error with HTTP status, error code and message.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            message,
        )
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ProductNotFound(_)
            | CatalogError::NoProductAt(_)
            | CatalogError::CatalogEmpty => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::PRODUCT_NOT_FOUND,
                err.to_string(),
            ),
            CatalogError::SupplierNotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::SUPPLIER_NOT_FOUND,
                err.to_string(),
            ),
            CatalogError::StockOverflow { .. } => Self::invalid_parameter(err.to_string()),
            CatalogError::Database(ref e) => {
                // Driver details stay in the log
                tracing::error!("Catalog database error: {:?}", e);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                    "Internal server error",
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_parameter(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_parameter(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_parameter(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code, self.message);
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err = ApiError::from(CatalogError::ProductNotFound(9));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, error_codes::PRODUCT_NOT_FOUND);
        assert!(err.message.contains('9'));

        let err = ApiError::from(CatalogError::SupplierNotFound(3));
        assert_eq!(err.code, error_codes::SUPPLIER_NOT_FOUND);

        let err = ApiError::from(CatalogError::CatalogEmpty);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_overflow_is_client_error() {
        let err = ApiError::from(CatalogError::StockOverflow {
            stock: i32::MIN,
            quantity: 1,
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::INVALID_PARAMETER);
    }

    #[test]
    fn test_database_error_is_opaque() {
        let err = ApiError::from(CatalogError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, error_codes::INTERNAL_ERROR);
        assert_eq!(err.message, "Internal server error");
    }

    #[test]
    fn test_into_response_status() {
        let resp = ApiError::from(CatalogError::NoProductAt(4)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
