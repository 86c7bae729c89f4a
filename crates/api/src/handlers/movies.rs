//! Handlers for the movie watchlist.
//!
//! Each mutation is written to the data file before the response is sent.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::movie::{CreateMovie, MoviePatch, NewMovie, UpdateMovie};
use watchlist_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{
    MessageResponse, MovieListResponse, MovieResponse, StatsResponse, MOVIE_ADDED, MOVIE_DELETED,
    MOVIE_UPDATED,
};
use crate::state::AppState;

/// GET /api/movies
///
/// The whole watchlist in insertion order. Filtering happens client-side.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.pool).await;

    Ok(Json(MovieListResponse::new(movies)))
}

/// POST /api/movies
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let new_movie = NewMovie::from_input(input)?;
    let movie = MovieRepo::create(&state.pool, new_movie).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie added");

    Ok((
        StatusCode::CREATED,
        Json(MovieResponse::new(MOVIE_ADDED, movie)),
    ))
}

/// PUT /api/movies/{id}
///
/// Shallow merge of the given fields; see [`MoviePatch`].
///
/// An unknown id is reported as 404 even when the body is also invalid.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    body: Result<JsonBody<UpdateMovie>, AppError>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::update_with(&state.pool, &movie_id, || {
        let JsonBody(input) = body?;
        Ok::<_, AppError>(MoviePatch::from_input(input)?)
    })
    .await?
    .ok_or_else(|| AppError::movie_not_found(&movie_id))?;

    tracing::info!(movie_id = %movie.id, status = %movie.status, "Movie updated");

    Ok(Json(MovieResponse::new(MOVIE_UPDATED, movie)))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !MovieRepo::delete(&state.pool, &movie_id).await {
        return Err(AppError::movie_not_found(movie_id));
    }

    tracing::info!(movie_id = %movie_id, "Movie deleted");

    Ok(Json(MessageResponse::new(MOVIE_DELETED)))
}

/// GET /api/movies/stats
pub async fn movie_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = MovieRepo::stats(&state.pool).await;

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
