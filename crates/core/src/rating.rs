//! Movie ratings: parsing loose client input and compact JSON output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::CoreError;

pub const INVALID_RATING_FORMAT: &str = "Invalid rating format";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 10";

/// A finite numeric rating.
///
/// The range is checked when a movie is added, not here: updates may store
/// any finite number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    /// Wrap a value, rejecting NaN and infinities.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(CoreError::Validation(INVALID_RATING_FORMAT.into()))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Coerce a JSON rating into a [`Rating`].
///
/// Accepts numbers and numeric strings (`"7.5"`, `" 8 "`). Anything else is
/// a format error.
pub fn parse_rating(value: &Value) -> Result<Rating, CoreError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) => Rating::new(v),
        None => Err(CoreError::Validation(INVALID_RATING_FORMAT.into())),
    }
}

/// Serialize a float as a JSON integer when it has no fractional part.
///
/// Keeps `9` as `9` rather than `9.0` in responses and in the data file.
pub fn serialize_compact<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_compact(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Rating::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_and_numeric_strings_parse() {
        assert_eq!(parse_rating(&json!(8)).unwrap().value(), 8.0);
        assert_eq!(parse_rating(&json!(7.5)).unwrap().value(), 7.5);
        assert_eq!(parse_rating(&json!(" 6 ")).unwrap().value(), 6.0);
    }

    #[test]
    fn non_numeric_input_is_a_format_error() {
        for input in [json!("abc"), json!(true), json!([1]), json!({"v": 1}), json!("")] {
            let err = parse_rating(&input).unwrap_err();
            assert_matches!(err, CoreError::Validation(msg) if msg == INVALID_RATING_FORMAT);
        }
    }

    #[test]
    fn non_finite_strings_are_rejected() {
        assert!(parse_rating(&json!("NaN")).is_err());
        assert!(parse_rating(&json!("inf")).is_err());
    }

    #[test]
    fn whole_ratings_serialize_as_integers() {
        let whole = Rating::new(9.0).unwrap();
        let half = Rating::new(7.5).unwrap();
        assert_eq!(serde_json::to_string(&whole).unwrap(), "9");
        assert_eq!(serde_json::to_string(&half).unwrap(), "7.5");
    }

    #[test]
    fn deserializes_from_integer_or_float() {
        let r: Rating = serde_json::from_str("9").unwrap();
        assert_eq!(r.value(), 9.0);
        let r: Rating = serde_json::from_str("9.25").unwrap();
        assert_eq!(r.value(), 9.25);
    }
}
