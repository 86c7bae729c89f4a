//! Watch status of a movie record.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const WATCHED: &str = "watched";
pub const UNWATCHED: &str = "unwatched";

/// Watch status as stored on a record.
///
/// Records normally toggle between `watched` and `unwatched`. Updates do
/// not restrict the value, so any other string is carried verbatim in
/// [`MovieStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovieStatus {
    Watched,
    #[default]
    Unwatched,
    Other(String),
}

impl MovieStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MovieStatus::Watched => WATCHED,
            MovieStatus::Unwatched => UNWATCHED,
            MovieStatus::Other(s) => s,
        }
    }

    /// `true` for `watched` and `unwatched`.
    pub fn is_known(&self) -> bool {
        !matches!(self, MovieStatus::Other(_))
    }
}

impl From<String> for MovieStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            WATCHED => MovieStatus::Watched,
            UNWATCHED => MovieStatus::Unwatched,
            _ => MovieStatus::Other(value),
        }
    }
}

impl From<MovieStatus> for String {
    fn from(status: MovieStatus) -> Self {
        match status {
            MovieStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_parse_to_variants() {
        let status: MovieStatus = serde_json::from_str("\"watched\"").unwrap();
        assert_eq!(status, MovieStatus::Watched);
        let status: MovieStatus = serde_json::from_str("\"unwatched\"").unwrap();
        assert_eq!(status, MovieStatus::Unwatched);
    }

    #[test]
    fn unknown_value_is_preserved() {
        let status: MovieStatus = serde_json::from_str("\"Watching\"").unwrap();
        assert_eq!(status, MovieStatus::Other("Watching".into()));
        assert!(!status.is_known());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Watching\"");
    }

    #[test]
    fn default_is_unwatched() {
        assert_eq!(MovieStatus::default(), MovieStatus::Unwatched);
        assert_eq!(MovieStatus::default().to_string(), "unwatched");
    }
}
