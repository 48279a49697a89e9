//! # Attribute Projections
//!
//! Entity attributes come back as scalars, lists of scalars, or tagged wrapper objects
//! naming the encoded kind of a scalar:
//!
//! * `{"__base64__": "<b64>"}` for binary data (standard alphabet, padded).
//! * `{"__datetime__": "20230810123000Z"}` for timestamps in LDAP generalized time.
//!
//! [`FromAttribute`] converts one element of a normalized attribute list into a Rust
//! value. Conversions are fail-soft: a shape mismatch yields `None`, never an error.
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// LDAP generalized time layout used by `__datetime__` values (UTC, no fractions).
pub const GENERALIZED_TIME_FORMAT: &str = "%Y%m%d%H%M%SZ";

const BASE64_TAG: &str = "__base64__";
const DATETIME_TAG: &str = "__datetime__";

/// A type that can be read out of a single attribute value.
pub trait FromAttribute: Sized {
    fn from_attribute(value: &Value) -> Option<Self>;
}

impl FromAttribute for bool {
    fn from_attribute(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromAttribute for String {
    fn from_attribute(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromAttribute for Vec<u8> {
    fn from_attribute(value: &Value) -> Option<Self> {
        let encoded = tagged(value, BASE64_TAG)?;
        STANDARD.decode(encoded).ok()
    }
}

impl FromAttribute for DateTime<Utc> {
    fn from_attribute(value: &Value) -> Option<Self> {
        tagged(value, DATETIME_TAG).and_then(parse_generalized_time)
    }
}

/// Parses a generalized time string such as `20230810123000Z`.
pub fn parse_generalized_time(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, GENERALIZED_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Converts every element or none: a single mismatch fails the whole projection.
pub(crate) fn project<T: FromAttribute>(values: &[&Value]) -> Option<Vec<T>> {
    values.iter().map(|value| T::from_attribute(value)).collect()
}

fn tagged<'a>(value: &'a Value, tag: &str) -> Option<&'a str> {
    value.as_object()?.get(tag)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_binary_requires_base64_tag() {
        let value = json!({ "__base64__": "aGVsbG8=" });
        assert_eq!(Vec::<u8>::from_attribute(&value), Some(b"hello".to_vec()));

        assert_eq!(Vec::<u8>::from_attribute(&json!("aGVsbG8=")), None);
        assert_eq!(Vec::<u8>::from_attribute(&json!({ "__datetime__": "aGVsbG8=" })), None);
        assert_eq!(Vec::<u8>::from_attribute(&json!({ "__base64__": "not base64!" })), None);
        assert_eq!(Vec::<u8>::from_attribute(&json!({ "__base64__": 12 })), None);
    }

    #[test]
    fn test_datetime_requires_datetime_tag() {
        let value = json!({ "__datetime__": "20230810143015Z" });
        let parsed = DateTime::<Utc>::from_attribute(&value).unwrap();

        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2023, 8, 10));
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (14, 30, 15));

        assert_eq!(DateTime::<Utc>::from_attribute(&json!("20230810143015Z")), None);
    }

    #[test]
    fn test_generalized_time_layout_is_strict() {
        assert!(parse_generalized_time("20230810143015Z").is_some());
        assert!(parse_generalized_time("20230810143015").is_none());
        assert!(parse_generalized_time("20230810143015.5Z").is_none());
        assert!(parse_generalized_time("2023-08-10T14:30:15Z").is_none());
        assert!(parse_generalized_time("20231310143015Z").is_none());
    }

    #[test]
    fn test_scalar_kinds_are_checked_directly() {
        assert_eq!(bool::from_attribute(&json!(true)), Some(true));
        assert_eq!(bool::from_attribute(&json!("TRUE")), None);
        assert_eq!(String::from_attribute(&json!("admin")), Some("admin".to_string()));
        assert_eq!(String::from_attribute(&json!(1)), None);
    }

    #[test]
    fn test_projection_is_all_or_nothing() {
        let (a, b, c) = (json!("a"), json!("b"), json!(3));

        assert_eq!(
            project::<String>(&[&a, &b]),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(project::<String>(&[&a, &c, &b]), None);
        assert_eq!(project::<String>(&[]), Some(vec![]));
    }
}
