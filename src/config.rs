use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Environment variable that overrides `catalog.postgres_url`
pub const POSTGRES_URL_ENV: &str = "NORTHWIND_POSTGRES_URL";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    #[serde(default)]
    pub use_json: bool,
    #[serde(default)]
    pub rotation: LogRotation,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Which store backs the catalog operations
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    pub backend: CatalogBackend,
    pub postgres_url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Create the products/suppliers tables on startup if missing
    pub init_schema: bool,
    /// JSON fixture loaded into the memory backend
    pub seed_file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: CatalogBackend::Postgres,
            postgres_url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
            init_schema: true,
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml`, then apply environment overrides.
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path))?;

        if let Ok(url) = std::env::var(POSTGRES_URL_ENV) {
            config.catalog.postgres_url = Some(url);
        }
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.gateway.host, self.gateway.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
log_level: debug
log_dir: ./logs
log_file: northwind.log
gateway:
  host: 127.0.0.1
  port: 4004
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.rotation, LogRotation::Daily);
        assert!(!config.use_json);
        assert_eq!(config.catalog.backend, CatalogBackend::Postgres);
        assert_eq!(config.catalog.max_connections, 10);
        assert!(config.catalog.postgres_url.is_none());
        assert_eq!(config.bind_addr(), "127.0.0.1:4004");
    }

    #[test]
    fn test_memory_backend_with_seed() {
        let yaml = format!(
            "{}rotation: never\ncatalog:\n  backend: memory\n  seed_file: fixtures/northwind.json\n",
            MINIMAL
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.rotation, LogRotation::Never);
        assert_eq!(config.catalog.backend, CatalogBackend::Memory);
        assert_eq!(
            config.catalog.seed_file.as_deref(),
            Some("fixtures/northwind.json")
        );
    }

    #[test]
    fn test_shipped_configs_parse() {
        let dev = AppConfig::from_yaml(include_str!("../config/dev.yaml")).unwrap();
        assert_eq!(dev.catalog.backend, CatalogBackend::Postgres);
        assert!(dev.catalog.postgres_url.is_some());

        let memory = AppConfig::from_yaml(include_str!("../config/memory.yaml")).unwrap();
        assert_eq!(memory.catalog.backend, CatalogBackend::Memory);
        assert!(memory.catalog.seed_file.is_some());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let yaml = format!(
            "{}catalog:\n  backend: sqlite\n",
            MINIMAL
        );
        assert!(AppConfig::from_yaml(&yaml).is_err());
    }
}
