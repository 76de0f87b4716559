pub mod error;
pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::Operation;
use state::AppState;

/// Route prefix of the catalog service
pub const CATALOG_PREFIX: &str = "/api/v1/catalog";

fn operation_route(op: Operation) -> axum::routing::MethodRouter<Arc<AppState>> {
    match op {
        Operation::SubmitOrder => post(handlers::submit_order),
        Operation::Discontinue => post(handlers::discontinue),
        Operation::RandomProduct => get(handlers::random_product),
        Operation::AddressLine => get(handlers::address_line),
    }
}

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let catalog_routes = Operation::ALL.into_iter().fold(
        Router::new()
            .route("/$operations", get(handlers::list_operations))
            .route("/Products", get(handlers::list_products))
            .route("/Products/{id}", get(handlers::get_product))
            .route("/Suppliers/{id}", get(handlers::get_supplier)),
        |router, op| router.route(op.path(), operation_route(op)),
    );

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest(CATALOG_PREFIX, catalog_routes)
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(bind_addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    for op in Operation::ALL {
        tracing::info!(
            "Registered {} {}{} ({})",
            op.kind().http_method(),
            CATALOG_PREFIX,
            op.path(),
            op.name()
        );
    }

    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Gateway listening on http://{}", bind_addr);
    tracing::info!("Swagger UI at http://{}/docs", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
