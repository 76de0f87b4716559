use anyhow::{Context, Result};
use sqlx::PgPool;

const CREATE_SUPPLIERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS suppliers (
    supplier_id   INTEGER PRIMARY KEY,
    company_name  TEXT NOT NULL,
    contact_name  TEXT,
    address       TEXT,
    city          TEXT,
    region        TEXT,
    postal_code   TEXT,
    country       TEXT,
    phone         TEXT
)"#;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    product_id         INTEGER PRIMARY KEY,
    product_name       TEXT NOT NULL,
    supplier_id        INTEGER REFERENCES suppliers (supplier_id),
    category_id        INTEGER,
    quantity_per_unit  TEXT,
    unit_price         NUMERIC(12, 4),
    units_in_stock     INTEGER NOT NULL DEFAULT 0,
    units_on_order     INTEGER NOT NULL DEFAULT 0,
    reorder_level      INTEGER NOT NULL DEFAULT 0,
    discontinued       BOOLEAN NOT NULL DEFAULT FALSE
)"#;

/// Create the catalog tables if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Initializing catalog schema...");

    sqlx::query(CREATE_SUPPLIERS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create suppliers table")?;

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create products table")?;

    tracing::info!("Catalog schema initialized successfully");
    Ok(())
}
