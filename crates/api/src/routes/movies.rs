//! Route definitions for the movie watchlist.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{fallback, movies};
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /          -> list_movies
/// POST   /          -> create_movie
/// GET    /stats     -> movie_stats
/// PUT    /{id}      -> update_movie
/// DELETE /{id}      -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/stats", get(movies::movie_stats))
        .route(
            "/{id}",
            put(movies::update_movie).delete(movies::delete_movie),
        )
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
