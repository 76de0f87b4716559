//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiResponse, error_codes};

/// Health check response data
#[derive(serde::Serialize, serde::Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Catalog backend in use
    #[schema(example = "postgres")]
    pub store: String,
    /// Build revision
    #[schema(example = "3f2c1ab")]
    pub version: String,
}

/// Health check endpoint
///
/// - Healthy: 200 OK + {code: 0, data: {timestamp_ms, store, version}}
/// - Unhealthy: 503 Service Unavailable + {code: 5001, msg: "unavailable"}
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthResponse>, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let healthy = match state.pg_db {
        Some(ref db) => match db.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
                false
            }
        },
        None => true,
    };

    if healthy {
        (
            StatusCode::OK,
            Json(ApiResponse::success(HealthResponse {
                timestamp_ms: now_ms,
                store: state.catalog().store_name().to_string(),
                version: env!("GIT_HASH").to_string(),
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                code: error_codes::SERVICE_UNAVAILABLE,
                msg: "unavailable".to_string(),
                data: None,
            }),
        )
    }
}
