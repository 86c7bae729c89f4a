//! Repository for movie records.
//!
//! Every mutating call persists the full collection before returning, while
//! still holding the collection lock.

use chrono::Utc;
use watchlist_core::movie::{Movie, MoviePatch, NewMovie};
use watchlist_core::stats::WatchlistStats;

use crate::DbPool;

/// Provides CRUD and statistics over the movie collection.
pub struct MovieRepo;

impl MovieRepo {
    /// All movies, in insertion order.
    pub async fn list(pool: &DbPool) -> Vec<Movie> {
        pool.lock().await.clone()
    }

    /// Append a new movie and persist. Returns the stored record.
    pub async fn create(pool: &DbPool, input: NewMovie) -> Movie {
        let mut movies = pool.lock().await;

        let movie = Movie::create(input, Utc::now());
        movies.push(movie.clone());
        pool.persist(&movies).await;

        movie
    }

    /// Merge a patch into the movie with `id` and persist.
    ///
    /// The patch is built only once the id is known to exist: a missing id
    /// returns `Ok(None)` without calling `make_patch`, so an unknown id wins
    /// over a bad request body.
    pub async fn update_with<E>(
        pool: &DbPool,
        id: &str,
        make_patch: impl FnOnce() -> Result<MoviePatch, E>,
    ) -> Result<Option<Movie>, E> {
        let mut movies = pool.lock().await;

        let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        movie.apply(make_patch()?, Utc::now());
        let updated = movie.clone();
        pool.persist(&movies).await;

        Ok(Some(updated))
    }

    /// Remove the movie with `id` and persist.
    ///
    /// Returns `false` if no movie has that id.
    pub async fn delete(pool: &DbPool, id: &str) -> bool {
        let mut movies = pool.lock().await;

        let Some(index) = movies.iter().position(|m| m.id == id) else {
            return false;
        };
        movies.remove(index);
        pool.persist(&movies).await;

        true
    }

    /// Totals and mean rating over the current collection.
    pub async fn stats(pool: &DbPool) -> WatchlistStats {
        WatchlistStats::from_movies(&pool.lock().await)
    }
}
