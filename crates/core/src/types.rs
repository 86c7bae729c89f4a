use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Movie identifiers are opaque strings. Records created by this service
/// carry a UUID v7 (millisecond timestamp followed by random bits).
pub type MovieId = String;

/// All timestamps are UTC.
pub type Timestamp = DateTime<Utc>;

/// Deserialize a [`Timestamp`] from RFC 3339, or from a naive ISO 8601
/// date-time without offset (`2024-05-01T12:00:00.123456`), read as UTC.
///
/// Data files written by earlier versions of the watchlist carry the
/// naive form.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Optional variant of [`deserialize_timestamp`]; `null` is `None`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn parse_timestamp(raw: &str) -> Result<Timestamp, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| format!("invalid timestamp '{raw}': {e}"))
}

/// Generate a fresh movie identifier.
///
/// UUID v7 embeds the creation time, so identifiers minted after a restart
/// cannot collide with the ones already present in the data file.
pub fn new_movie_id() -> MovieId {
    uuid::Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_within_a_run() {
        let ids: HashSet<MovieId> = (0..10_000).map(|_| new_movie_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn rfc3339_timestamps_parse() {
        let ts = parse_timestamp("2024-05-01T12:00:00.5+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T10:00:00.500+00:00");
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let ts = parse_timestamp("2024-05-01T12:00:00.123456").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T12:00:00.123456+00:00");

        let ts = parse_timestamp("2024-05-01T12:00:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn garbage_timestamps_are_rejected() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn ids_are_hyphenated_uuids() {
        let id = new_movie_id();
        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
}
