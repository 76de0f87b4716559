//! Northwind catalog service
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌────────────┐    ┌──────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ Dispatcher │───▶│ CatalogStore │
//! │  (YAML)  │    │  (axum)  │    │ (Operation)│    │ (PG / memory)│
//! └──────────┘    └──────────┘    └────────────┘    └──────────────┘
//! ```
//!
//! Usage: `northwind [--env <name>] [--port <port>] [--memory]`

use anyhow::{Context, Result};
use std::sync::Arc;

use northwind::catalog::{CatalogService, CatalogStore, MemoryCatalog, PgCatalog};
use northwind::config::{AppConfig, CatalogBackend, POSTGRES_URL_ENV};
use northwind::db::{Database, schema};
use northwind::gateway::{self, state::AppState};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn use_memory_backend() -> bool {
    std::env::args().any(|a| a == "--memory")
}

async fn open_catalog(
    config: &AppConfig,
) -> Result<(Arc<dyn CatalogStore>, Option<Arc<Database>>)> {
    let catalog = &config.catalog;
    match catalog.backend {
        CatalogBackend::Memory => {
            let store = match catalog.seed_file {
                Some(ref path) => MemoryCatalog::from_fixture_file(path)?,
                None => {
                    tracing::warn!("Memory backend without seed_file, catalog is empty");
                    MemoryCatalog::new()
                }
            };
            Ok((Arc::new(store), None))
        }
        CatalogBackend::Postgres => {
            let url = catalog.postgres_url.as_deref().with_context(|| {
                format!(
                    "catalog.postgres_url is not set (config or {})",
                    POSTGRES_URL_ENV
                )
            })?;
            let db = Database::from_config(catalog, url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            if catalog.init_schema {
                schema::init_schema(db.pool()).await?;
            }
            let db = Arc::new(db);
            Ok((Arc::new(PgCatalog::new(db.pool().clone())), Some(db)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    if use_memory_backend() {
        app_config.catalog.backend = CatalogBackend::Memory;
    }

    let _log_guard = northwind::logging::init_logging(&app_config);
    tracing::info!(
        "Starting Northwind catalog service ({}) in {} mode",
        env!("GIT_HASH"),
        env
    );

    let (store, pg_db) = open_catalog(&app_config).await?;
    tracing::info!("Catalog backend: {}", store.name());

    let state = Arc::new(AppState::new(CatalogService::new(store), pg_db));
    gateway::run_server(&app_config.bind_addr(), state).await
}
