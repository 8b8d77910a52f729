use crate::config::DatabaseSettings;
use mongodb::{options::ClientOptions, Client as MongoClient};
use secrecy::{ExposeSecret, Secret};
use service_core::error::AppError;
use std::time::Duration;

/// Ad-hoc connectivity check.
///
/// Every call opens its own short-lived client, so the result reflects what a
/// fresh connection sees and never disturbs the serving store's pool.
#[derive(Clone, Debug)]
pub struct ConnectionProbe {
    connection_string: Secret<String>,
    timeout: Duration,
}

impl ConnectionProbe {
    pub fn new(settings: &DatabaseSettings) -> Self {
        Self {
            connection_string: settings.connection_string.clone(),
            timeout: Duration::from_millis(settings.check_timeout_ms),
        }
    }

    /// Lists the database names visible through a fresh connection.
    pub async fn list_database_names(&self) -> Result<Vec<String>, AppError> {
        let mut options = ClientOptions::parse(self.connection_string.expose_secret()).await?;
        options.app_name = Some("movie-service-check".to_string());
        options.server_selection_timeout = Some(self.timeout);
        options.connect_timeout = Some(self.timeout);

        let client = MongoClient::with_options(options)?;
        let names = client.list_database_names(None, None).await;
        client.shutdown().await;

        let names = names?;
        tracing::debug!(count = names.len(), "Connection probe succeeded");
        Ok(names)
    }
}
