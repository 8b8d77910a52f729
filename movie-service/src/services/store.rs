use crate::models::Movie;
use async_trait::async_trait;
use service_core::error::AppError;

/// Persistence contract for movies.
///
/// `update` and `delete` match on id only and are silent no-ops when nothing
/// matches; callers that need a 404 must look the movie up first.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Every stored movie, in the backend's natural scan order.
    async fn list_all(&self) -> Result<Vec<Movie>, AppError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>, AppError>;

    /// Inserts `movie`, assigning an id when it has none, and returns what
    /// was stored.
    async fn create(&self, movie: Movie) -> Result<Movie, AppError>;

    /// Replaces the whole document stored under `id`. The id of `movie` is
    /// forced to `id`.
    async fn update(&self, id: &str, movie: Movie) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
