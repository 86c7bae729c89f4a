pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                  liveness (GET)
///
/// /movies                  list (GET), create (POST)
/// /movies/stats            statistics (GET)
/// /movies/{id}             update (PUT), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/movies", movies::router())
}
