use std::sync::Arc;

use crate::catalog::{CatalogService, Dispatcher};
use crate::db::Database;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Operation dispatcher over the catalog service
    pub dispatcher: Dispatcher,
    /// PostgreSQL pool, `None` with the memory backend
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(service: CatalogService, pg_db: Option<Arc<Database>>) -> Self {
        Self {
            dispatcher: Dispatcher::new(service),
            pg_db,
        }
    }

    pub fn catalog(&self) -> &CatalogService {
        self.dispatcher.service()
    }
}
