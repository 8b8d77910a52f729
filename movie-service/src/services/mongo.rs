use crate::config::{DatabaseSettings, COLLECTION_NAME, DATABASE_NAME};
use crate::models::Movie;
use crate::services::store::MovieStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
    Client as MongoClient, Collection,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;

/// MongoDB-backed store holding one long-lived collection handle.
///
/// The driver's client is internally pooled and safe to share, so the store
/// is cloned into every request rather than reconnecting.
#[derive(Clone)]
pub struct MongoMovieStore {
    client: MongoClient,
    movies: Collection<Movie>,
}

impl MongoMovieStore {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, AppError> {
        tracing::info!(
            database = DATABASE_NAME,
            collection = COLLECTION_NAME,
            "Connecting to MongoDB"
        );
        let mut options = ClientOptions::parse(settings.connection_string.expose_secret())
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse MongoDB connection string: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        options.app_name = Some("movie-service".to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(Self::from_client(client))
    }

    pub fn from_client(client: MongoClient) -> Self {
        let movies = client.database(DATABASE_NAME).collection(COLLECTION_NAME);
        Self { client, movies }
    }
}

#[async_trait]
impl MovieStore for MongoMovieStore {
    async fn list_all(&self) -> Result<Vec<Movie>, AppError> {
        let cursor = self.movies.find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to list movies: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        let movies: Vec<Movie> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect movies: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        tracing::debug!(count = movies.len(), "Listed movies");
        Ok(movies)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>, AppError> {
        self.movies
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(movie_id = %id, "Failed to find movie: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })
    }

    async fn create(&self, mut movie: Movie) -> Result<Movie, AppError> {
        if movie.needs_id() {
            movie.id = Some(ObjectId::new().to_hex());
        }

        self.movies.insert_one(&movie, None).await.map_err(|e| {
            tracing::error!("Failed to insert movie: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        tracing::info!(movie_id = ?movie.id, "Movie created");
        Ok(movie)
    }

    async fn update(&self, id: &str, movie: Movie) -> Result<(), AppError> {
        let movie = movie.with_id(id);
        let result = self
            .movies
            .replace_one(doc! { "_id": id }, &movie, None)
            .await
            .map_err(|e| {
                tracing::error!(movie_id = %id, "Failed to replace movie: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        if result.matched_count == 0 {
            tracing::debug!(movie_id = %id, "Replace matched no movie");
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = self
            .movies
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(movie_id = %id, "Failed to delete movie: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        if result.deleted_count == 0 {
            tracing::debug!(movie_id = %id, "Delete matched no movie");
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}
