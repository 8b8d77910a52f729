pub mod health;
pub mod movies;

pub use health::{check_database, health_check, metrics, readiness_check, version};
pub use movies::{create_movie, delete_movie, get_movie, list_movies, update_movie};
