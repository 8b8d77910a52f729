use config::{Config as Cfg, File};
use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Database and collection are fixed for this service.
pub const DATABASE_NAME: &str = "gbs";
pub const COLLECTION_NAME: &str = "movies";

const DEV_CONNECTION_STRING: &str = "mongodb://localhost:27017";

#[derive(Debug, Clone)]
pub struct MovieConfig {
    pub common: core_config::Config,
    pub database_settings: DatabaseSettings,
    pub observability: ObservabilityConfig,
}

/// The service-specific part of the configuration tree.
#[derive(Debug, Deserialize)]
struct MovieSettings {
    database_settings: DatabaseSettings,
    #[serde(default)]
    observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub connection_string: Secret<String>,
    /// Upper bound on server selection for the `/check` probe.
    #[serde(default = "default_check_timeout_ms")]
    pub check_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            log_level: default_log_level(),
        }
    }
}

fn default_check_timeout_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DatabaseSettings {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: Secret::new(connection_string.into()),
            check_timeout_ms: default_check_timeout_ms(),
        }
    }
}

impl MovieConfig {
    /// Loads configuration from `.env`, an optional `configuration` file and
    /// `APP__*` environment variables. `MONGODB_URI`, `OTLP_ENDPOINT` and
    /// `LOG_LEVEL` are accepted as shortcuts.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let mut builder = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option(
                "database_settings.connection_string",
                env::var("MONGODB_URI").ok(),
            )?
            .set_override_option("observability.otlp_endpoint", env::var("OTLP_ENDPOINT").ok())?
            .set_override_option("observability.log_level", env::var("LOG_LEVEL").ok())?;

        if !is_prod {
            builder =
                builder.set_default("database_settings.connection_string", DEV_CONNECTION_STRING)?;
        }

        let config = builder.build().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Failed to assemble configuration: {}", e))
        })?;

        let settings: MovieSettings = config.try_deserialize().map_err(|e| {
            if is_prod {
                AppError::ConfigError(anyhow::anyhow!(
                    "Invalid configuration (the connection string must be set explicitly in production): {}",
                    e
                ))
            } else {
                AppError::from(e)
            }
        })?;

        Ok(Self {
            common,
            database_settings: settings.database_settings,
            observability: settings.observability,
        })
    }
}
