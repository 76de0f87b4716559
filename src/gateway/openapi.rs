//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:4004/docs`
//! - OpenAPI JSON: `http://localhost:4004/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::catalog::dispatch::{EntitySet, OperationInfo, OperationKind};
use crate::catalog::{Product, Supplier};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::SubmitOrderRequest;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Northwind Catalog API",
        version = "1.0.0",
        description = "Order submission, product discontinuation and supplier lookups over the Northwind catalog.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:4004", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        // Operations
        crate::gateway::handlers::catalog::submit_order,
        crate::gateway::handlers::catalog::discontinue,
        crate::gateway::handlers::catalog::random_product,
        crate::gateway::handlers::catalog::address_line,
        crate::gateway::handlers::catalog::list_operations,
        // Entity reads
        crate::gateway::handlers::catalog::list_products,
        crate::gateway::handlers::catalog::get_product,
        crate::gateway::handlers::catalog::get_supplier,
    ),
    components(
        schemas(
            HealthResponse,
            SubmitOrderRequest,
            Product,
            Supplier,
            OperationInfo,
            OperationKind,
            EntitySet,
        )
    ),
    tags(
        (name = "System", description = "Health and service metadata"),
        (name = "Catalog", description = "Catalog actions and functions"),
        (name = "Entities", description = "Product and supplier reads"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_documented() {
        let doc = ApiDoc::openapi();
        for op in crate::catalog::Operation::ALL {
            let path = format!("/api/v1/catalog{}", op.path());
            assert!(doc.paths.paths.contains_key(&path), "missing {}", path);
        }
    }

    #[test]
    fn test_openapi_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("Northwind Catalog API"));
        assert!(json.contains("/api/v1/catalog/submitOrder"));
    }
}
