//! The movie record and its create/update inputs.
//!
//! - [`Movie`] is the stored record, serialized as-is to the data file and
//!   to API responses.
//! - [`CreateMovie`] / [`UpdateMovie`] are the raw request bodies.
//! - [`NewMovie`] / [`MoviePatch`] are the normalised, checked forms the
//!   repository consumes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::rating::{parse_rating, Rating};
use crate::status::MovieStatus;
use crate::types::{
    deserialize_optional_timestamp, deserialize_timestamp, new_movie_id, MovieId, Timestamp,
};
use crate::validation::{field_message, validate_not_blank, INVALID_STATUS};

/// Genre stored when the client leaves it out.
pub const DEFAULT_GENRE: &str = "Not specified";

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub status: MovieStatus,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: Timestamp,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<Timestamp>,
}

impl Movie {
    /// Build a record from checked input, assigning a fresh id.
    pub fn create(input: NewMovie, now: Timestamp) -> Self {
        Self {
            id: new_movie_id(),
            title: input.title,
            genre: input.genre,
            rating: input.rating.and_then(|v| Rating::new(v).ok()),
            status: input.status,
            created_at: now,
            updated_at: None,
        }
    }

    /// Shallow-merge a patch into the record and stamp `updated_at`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: MoviePatch, now: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Some(now.max(self.created_at));
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Body of `POST /api/movies`.
///
/// `rating` is kept as raw JSON so numeric strings can be coerced and
/// anything else reported as a format error rather than a body error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<Value>,
    pub status: Option<MovieStatus>,
}

/// Normalised create input. Construct through [`NewMovie::from_input`].
#[derive(Debug, Clone, Validate)]
pub struct NewMovie {
    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    pub title: String,
    pub genre: String,
    #[validate(range(min = 1.0, max = 10.0, message = "Rating must be between 1 and 10"))]
    pub rating: Option<f64>,
    pub status: MovieStatus,
}

impl NewMovie {
    /// Apply defaults and check a create request.
    ///
    /// Checks run in order and the first failure is returned: title, rating
    /// format, rating range, status.
    pub fn from_input(input: CreateMovie) -> Result<Self, CoreError> {
        let title = input.title.unwrap_or_default().trim().to_string();

        let genre = match input.genre {
            Some(g) if !g.trim().is_empty() => g,
            _ => DEFAULT_GENRE.to_string(),
        };

        let rating = input
            .rating
            .as_ref()
            .filter(|v| !v.is_null())
            .map(parse_rating)
            .transpose();

        let movie = NewMovie {
            title,
            genre,
            rating: rating.as_ref().ok().copied().flatten().map(Rating::value),
            status: input.status.unwrap_or_default(),
        };

        let errors = movie.validate().err();

        if let Some(msg) = errors.as_ref().and_then(|e| field_message(e, "title")) {
            return Err(CoreError::Validation(msg));
        }
        rating?;
        if let Some(msg) = errors.as_ref().and_then(|e| field_message(e, "rating")) {
            return Err(CoreError::Validation(msg));
        }
        if !movie.status.is_known() {
            return Err(CoreError::Validation(INVALID_STATUS.into()));
        }

        Ok(movie)
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Body of `PUT /api/movies/{id}`. Every field is optional.
///
/// Each field distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`). A `null` rating clears the stored rating; a `null`
/// title, genre or status is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub genre: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub rating: Option<Option<Value>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<Option<MovieStatus>>,
}

/// Checked update input.
///
/// Only type coercion happens here. Values are merged as given, without
/// the title and range rules applied on create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<Option<Rating>>,
    pub status: Option<MovieStatus>,
}

impl MoviePatch {
    pub fn from_input(input: UpdateMovie) -> Result<Self, CoreError> {
        let rating = match input.rating {
            None => None,
            Some(None) => Some(None),
            Some(Some(value)) => Some(Some(parse_rating(&value)?)),
        };

        Ok(Self {
            title: non_null("title", input.title)?,
            genre: non_null("genre", input.genre)?,
            rating,
            status: non_null("status", input.status)?,
        })
    }
}

/// Reject an explicit `null` for a field that cannot be cleared.
fn non_null<T>(field: &str, value: Option<Option<T>>) -> Result<Option<T>, CoreError> {
    match value {
        Some(None) => Err(CoreError::Validation(format!("{field} cannot be null"))),
        Some(Some(v)) => Ok(Some(v)),
        None => Ok(None),
    }
}

/// Wrap any present value (including `null`) in `Some`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
