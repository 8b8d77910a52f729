use crate::models::Movie;
use crate::services::store::MovieStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store that keeps movies in insertion order.
///
/// Serves local runs without a database and the HTTP tests.
#[derive(Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

fn has_id(movie: &Movie, id: &str) -> bool {
    movie.id.as_deref() == Some(id)
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list_all(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.movies.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>, AppError> {
        Ok(self
            .movies
            .read()
            .await
            .iter()
            .find(|movie| has_id(movie, id))
            .cloned())
    }

    async fn create(&self, mut movie: Movie) -> Result<Movie, AppError> {
        if movie.needs_id() {
            movie.id = Some(ObjectId::new().to_hex());
        }

        let mut movies = self.movies.write().await;
        if let Some(id) = movie.id.as_deref() {
            if movies.iter().any(|existing| has_id(existing, id)) {
                // Same outcome as a duplicate key on a unique `_id` index
                return Err(AppError::DatabaseError(anyhow::anyhow!(
                    "duplicate key: movie {} already exists",
                    id
                )));
            }
        }
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: &str, movie: Movie) -> Result<(), AppError> {
        let mut movies = self.movies.write().await;
        if let Some(slot) = movies.iter_mut().find(|existing| has_id(existing, id)) {
            *slot = movie.with_id(id);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut movies = self.movies.write().await;
        if let Some(index) = movies.iter().position(|movie| has_id(movie, id)) {
            movies.remove(index);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
