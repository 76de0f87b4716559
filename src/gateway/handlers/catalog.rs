//! Catalog operation and entity handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::super::types::{ApiResponse, SubmitOrderRequest};
use crate::catalog::{
    Invocation, OperationInfo, Outcome, Page, Product, ProductId, Supplier, SupplierId,
};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Submit an order against a product's stock
///
/// Returns the stock left after the order. Stock may go negative.
#[utoipa::path(
    post,
    path = "/api/v1/catalog/submitOrder",
    request_body = SubmitOrderRequest,
    responses(
        (status = 200, description = "New stock level", body = ApiResponse<i32>),
        (status = 400, description = "Malformed payload or stock out of range"),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn submit_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitOrderRequest>, JsonRejection>,
) -> ApiResult<Outcome> {
    let Json(req) = payload?;
    let outcome = state
        .dispatcher
        .invoke(Invocation::SubmitOrder {
            product: req.product,
            quantity: req.quantity,
        })
        .await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// Discontinue a product
///
/// Zeroes stock and on-order counts, sets the discontinued flag and returns
/// the updated product.
#[utoipa::path(
    post,
    path = "/api/v1/catalog/Products/{id}/discontinue",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn discontinue(
    State(state): State<Arc<AppState>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> ApiResult<Outcome> {
    let Path(product) = id?;
    let outcome = state
        .dispatcher
        .invoke(Invocation::Discontinue { product })
        .await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// Random product
///
/// Draws an ID uniformly from `[1, max(ProductID)]`. An ID that no longer
/// exists yields 404.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/randomProduct",
    responses(
        (status = 200, description = "A product", body = ApiResponse<Product>),
        (status = 404, description = "Drawn ID does not exist or catalog is empty")
    ),
    tag = "Catalog"
)]
pub async fn random_product(State(state): State<Arc<AppState>>) -> ApiResult<Outcome> {
    let outcome = state.dispatcher.invoke(Invocation::RandomProduct).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// Supplier address line
///
/// `Address, City, PostalCode, Country` joined with ", ".
#[utoipa::path(
    get,
    path = "/api/v1/catalog/Suppliers/{id}/addressLine",
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Address line", body = ApiResponse<String>),
        (status = 404, description = "Supplier not found")
    ),
    tag = "Catalog"
)]
pub async fn address_line(
    State(state): State<Arc<AppState>>,
    id: Result<Path<SupplierId>, PathRejection>,
) -> ApiResult<Outcome> {
    let Path(supplier) = id?;
    let outcome = state
        .dispatcher
        .invoke(Invocation::AddressLine { supplier })
        .await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// List registered operations
#[utoipa::path(
    get,
    path = "/api/v1/catalog/$operations",
    responses(
        (status = 200, description = "Registered operations", body = ApiResponse<Vec<OperationInfo>>)
    ),
    tag = "Catalog"
)]
pub async fn list_operations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<OperationInfo>> {
    Ok(Json(ApiResponse::success(state.dispatcher.operations())))
}

/// List products ordered by ID
#[utoipa::path(
    get,
    path = "/api/v1/catalog/Products",
    params(Page),
    responses(
        (status = 200, description = "Products", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Entities"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    page: Result<Query<Page>, QueryRejection>,
) -> ApiResult<Vec<Product>> {
    let Query(page) = page?;
    let products = state.catalog().products(page).await?;
    Ok(Json(ApiResponse::success(products)))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/v1/catalog/Products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "Entities"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> ApiResult<Product> {
    let Path(id) = id?;
    let product = state.catalog().product(id).await?;
    Ok(Json(ApiResponse::success(product)))
}

/// Get supplier by ID
#[utoipa::path(
    get,
    path = "/api/v1/catalog/Suppliers/{id}",
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier not found")
    ),
    tag = "Entities"
)]
pub async fn get_supplier(
    State(state): State<Arc<AppState>>,
    id: Result<Path<SupplierId>, PathRejection>,
) -> ApiResult<Supplier> {
    let Path(id) = id?;
    let supplier = state.catalog().supplier(id).await?;
    Ok(Json(ApiResponse::success(supplier)))
}
