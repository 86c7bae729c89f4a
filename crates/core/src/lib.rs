//! Domain logic for the movie watchlist.
//!
//! Record types, input normalisation and validation, patch merging and
//! statistics. Nothing in this crate performs I/O.

pub mod error;
pub mod movie;
pub mod rating;
pub mod stats;
pub mod status;
pub mod types;
pub mod validation;
