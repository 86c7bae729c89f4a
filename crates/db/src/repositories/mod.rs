//! Repositories over the watchlist storage.

mod movie_repo;

pub use movie_repo::MovieRepo;
