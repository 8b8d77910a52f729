#![allow(dead_code)]

use movie_service::config::{DatabaseSettings, MovieConfig, ObservabilityConfig};
use movie_service::services::{InMemoryMovieStore, MovieStore};
use movie_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

/// Nothing listens here, so the `/check` probe fails fast.
pub const UNREACHABLE_MONGODB_URI: &str = "mongodb://127.0.0.1:1/?directConnection=true";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: InMemoryMovieStore,
    pub client: reqwest::Client,
}

pub fn test_config(connection_string: &str) -> MovieConfig {
    let mut database_settings = DatabaseSettings::new(connection_string);
    database_settings.check_timeout_ms = 300;

    MovieConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        database_settings,
        observability: ObservabilityConfig::default(),
    }
}

impl TestApp {
    /// Spawn the service on a random port, backed by an in-memory store.
    pub async fn spawn() -> Self {
        let store = InMemoryMovieStore::new();
        Self::spawn_with(test_config(UNREACHABLE_MONGODB_URI), store).await
    }

    pub async fn spawn_with(config: MovieConfig, store: InMemoryMovieStore) -> Self {
        let shared: Arc<dyn MovieStore> = Arc::new(store.clone());
        let app = Application::build_with_store(config, shared)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// POST a movie and return the response body, which carries the assigned `Id`.
    pub async fn post_movie(&self, body: serde_json::Value) -> serde_json::Value {
        let response = self
            .client
            .post(self.url("/api/movies"))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("Failed to parse JSON")
    }
}
