//! Storage layer for the movie watchlist.
//!
//! - [`store::JsonStore`] persists the whole collection as one JSON file.
//! - [`MovieDb`] holds the authoritative in-memory collection and writes it
//!   through the store after every mutation.
//! - [`repositories::MovieRepo`] exposes the watchlist operations over a
//!   [`DbPool`].

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use watchlist_core::movie::Movie;

pub mod repositories;
pub mod store;

use store::JsonStore;

/// Shared handle to the watchlist storage, cloned into every handler.
pub type DbPool = Arc<MovieDb>;

/// In-memory movie collection backed by a [`JsonStore`].
///
/// The collection sits behind a mutex that is held across the file write,
/// so the file always matches the latest acknowledged mutation.
pub struct MovieDb {
    store: JsonStore,
    movies: Mutex<Vec<Movie>>,
}

impl MovieDb {
    /// Wrap an already-loaded collection.
    pub fn new(store: JsonStore, movies: Vec<Movie>) -> Self {
        Self {
            store,
            movies: Mutex::new(movies),
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, Vec<Movie>> {
        self.movies.lock().await
    }

    /// Write the collection to disk, logging instead of failing.
    ///
    /// The mutation that triggered the write is acknowledged either way.
    pub(crate) async fn persist(&self, movies: &[Movie]) {
        if let Err(e) = self.store.save(movies).await {
            tracing::error!(
                error = %e,
                path = %self.store.path().display(),
                "Failed to persist movies; in-memory state is ahead of disk",
            );
        }
    }
}

/// Open the watchlist backed by the file at `path`.
///
/// A missing file starts an empty watchlist. An unreadable or corrupt file
/// is logged and also starts empty so the service can come up.
pub async fn open(path: impl Into<PathBuf>) -> DbPool {
    let store = JsonStore::new(path);

    let movies = match store.load().await {
        Ok(movies) => {
            tracing::info!(
                count = movies.len(),
                path = %store.path().display(),
                "Loaded movies",
            );
            movies
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %store.path().display(),
                "Failed to load movies, starting with an empty watchlist",
            );
            Vec::new()
        }
    };

    Arc::new(MovieDb::new(store, movies))
}
