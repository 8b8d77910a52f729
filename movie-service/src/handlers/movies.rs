//! `/api/movies` handlers.
//!
//! PUT and DELETE look the movie up before mutating it. The lookup and the
//! write are separate round trips, so two requests racing on the same id can
//! both pass the check.

use crate::models::{Movie, MovieDto};
use crate::services::record_operation;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<MovieDto>>, AppError> {
    let movies = state.store.list_all().await?;
    record_operation("list", "ok");

    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieDto>, AppError> {
    let movie = state.store.get_by_id(&id).await?.ok_or_else(|| {
        record_operation("get", "not_found");
        AppError::not_found("Movie")
    })?;
    record_operation("get", "ok");

    Ok(Json(MovieDto::from(movie)))
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<MovieDto>,
) -> Result<Json<MovieDto>, AppError> {
    let movie = state.store.create(Movie::from(payload)).await?;
    record_operation("create", "ok");

    tracing::info!(movie_id = ?movie.id, "Movie stored");
    Ok(Json(MovieDto::from(movie)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MovieDto>,
) -> Result<Json<MovieDto>, AppError> {
    if state.store.get_by_id(&id).await?.is_none() {
        record_operation("update", "not_found");
        return Err(AppError::not_found("Movie"));
    }

    let movie = Movie::from(payload).with_id(id.as_str());
    state.store.update(&id, movie.clone()).await?;
    record_operation("update", "ok");

    tracing::info!(movie_id = %id, "Movie replaced");
    Ok(Json(MovieDto::from(movie)))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.get_by_id(&id).await?.is_none() {
        record_operation("delete", "not_found");
        return Err(AppError::not_found("Movie"));
    }

    state.store.delete(&id).await?;
    record_operation("delete", "ok");

    tracing::info!(movie_id = %id, "Movie deleted");
    Ok(StatusCode::OK)
}
