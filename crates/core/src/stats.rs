//! Collection-wide statistics.

use serde::Serialize;

use crate::movie::Movie;
use crate::rating::serialize_compact;
use crate::status::MovieStatus;

/// Counts and mean rating over the whole watchlist.
///
/// Records with a status other than `watched`/`unwatched` count towards
/// `total` only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistStats {
    pub total: usize,
    pub watched: usize,
    pub unwatched: usize,
    /// Mean of all present ratings, rounded to two decimals; `0` when no
    /// record is rated.
    #[serde(serialize_with = "serialize_compact")]
    pub average_rating: f64,
}

impl WatchlistStats {
    pub fn from_movies(movies: &[Movie]) -> Self {
        let watched = movies
            .iter()
            .filter(|m| m.status == MovieStatus::Watched)
            .count();
        let unwatched = movies
            .iter()
            .filter(|m| m.status == MovieStatus::Unwatched)
            .count();

        let ratings: Vec<f64> = movies
            .iter()
            .filter_map(|m| m.rating)
            .map(|r| r.value())
            .collect();

        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            round2(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };

        Self {
            total: movies.len(),
            watched,
            unwatched,
            average_rating,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
