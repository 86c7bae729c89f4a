//! Response envelopes for API handlers.
//!
//! Every body carries a `success` flag next to its payload, matching what
//! the browser client reads.

use serde::Serialize;
use watchlist_core::movie::Movie;
use watchlist_core::stats::WatchlistStats;

pub const MOVIE_ADDED: &str = "Movie added successfully";
pub const MOVIE_UPDATED: &str = "Movie updated successfully";
pub const MOVIE_DELETED: &str = "Movie deleted successfully";

/// `GET /api/movies`
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
    pub count: usize,
}

impl MovieListResponse {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            success: true,
            count: movies.len(),
            movies,
        }
    }
}

/// A single movie plus a confirmation message (create, update).
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub success: bool,
    pub message: &'static str,
    pub movie: Movie,
}

impl MovieResponse {
    pub fn new(message: &'static str, movie: Movie) -> Self {
        Self {
            success: true,
            message,
            movie,
        }
    }
}

/// A bare acknowledgement (delete).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// `GET /api/movies/stats`
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: WatchlistStats,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
