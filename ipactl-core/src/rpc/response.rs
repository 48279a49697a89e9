//! # Response Envelope & Accessors
//!
//! [`Response::parse`] decodes the body of a `/session/json` answer. The envelope holds
//! either an `error` or a `result`; an error envelope becomes an [`ApiError`] and an
//! envelope with neither is rejected as `no result in response`.
//!
//! The accessor layer reads the polymorphic `result.result` payload, which is a boolean,
//! a single entity (one mapping of attribute names to values) or a list of entities.
//! Every attribute is normalized to a list before projection, so a bare scalar and a
//! one-element list holding the same scalar read identically.
use super::attribute::{FromAttribute, project};
use crate::errors::ApiError;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Errors that can occur when decoding a JSON-RPC answer.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed JSON-RPC response: '{0}'")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no result in response")]
    NoResult,
}

/// An error or advisory message attached to an answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub code: i64,
    pub message: String,
}

/// The `result` object of a successful answer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RpcResult {
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub truncated: bool,
    pub messages: Option<Vec<Message>>,
    /// The command-specific payload: a boolean, an entity, or a list of entities.
    #[serde(rename = "result")]
    pub payload: Value,
    pub summary: Option<String>,
    /// Usually the primary key the command acted on. Some commands send a list.
    pub value: Value,
}

/// An explicit `null` reads as the zero value, the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    error: Option<Message>,
    #[serde(default)]
    result: Option<RpcResult>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    principal: Option<String>,
}

/// A successfully decoded answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub result: RpcResult,
    version: Option<String>,
    principal: Option<String>,
}

/// Generates the singular/plural and plain/indexed accessors for one attribute kind.
macro_rules! typed_accessors {
    ($ty:ty, $one:ident, $all:ident, $one_at:ident, $all_at:ident) => {
        #[doc = concat!("Reads the first `", stringify!($ty), "` stored under `key` in the single-entity payload.")]
        pub fn $one(&self, key: &str) -> Option<$ty> {
            self.get_one(key)
        }

        #[doc = concat!("Reads every `", stringify!($ty), "` stored under `key` in the single-entity payload.")]
        pub fn $all(&self, key: &str) -> Option<Vec<$ty>> {
            self.get_all(key)
        }

        #[doc = concat!("Reads the first `", stringify!($ty), "` stored under `key` in entity `index` of a list payload.")]
        pub fn $one_at(&self, index: usize, key: &str) -> Option<$ty> {
            self.get_one_at(index, key)
        }

        #[doc = concat!("Reads every `", stringify!($ty), "` stored under `key` in entity `index` of a list payload.")]
        pub fn $all_at(&self, index: usize, key: &str) -> Option<Vec<$ty>> {
            self.get_all_at(index, key)
        }
    };
}

impl Response {
    /// Decodes a raw answer body.
    ///
    /// # Returns
    ///
    /// * `Ok(Response)` - The envelope carried a result.
    /// * `Err(ParseError::Api)` - The envelope carried an error.
    /// * `Err(ParseError::NoResult)` - The envelope carried neither.
    /// * `Err(ParseError::Malformed)` - The body is not a JSON-RPC envelope.
    pub fn parse(body: &[u8]) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(ParseError::Malformed(serde_json::Error::custom(
                "expected a JSON-RPC envelope object",
            )));
        }
        let envelope: Envelope = serde_json::from_value(value)?;

        if let Some(error) = envelope.error {
            return Err(ParseError::Api(error.into()));
        }

        let result = envelope.result.ok_or(ParseError::NoResult)?;

        Ok(Self {
            result,
            version: envelope.version,
            principal: envelope.principal,
        })
    }

    /// Server release that produced the answer.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The principal the call was executed as.
    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    pub fn payload(&self) -> &Value {
        &self.result.payload
    }

    pub fn count(&self) -> i64 {
        self.result.count
    }

    pub fn truncated(&self) -> bool {
        self.result.truncated
    }

    pub fn messages(&self) -> &[Message] {
        self.result.messages.as_deref().unwrap_or_default()
    }

    pub fn summary(&self) -> Option<&str> {
        self.result.summary.as_deref()
    }

    /// The `value` field, taking the first string when the service sent a list.
    pub fn value(&self) -> Option<&str> {
        match &self.result.value {
            Value::String(value) => Some(value),
            Value::Array(values) => values.first().and_then(Value::as_str),
            _ => None,
        }
    }

    /// The payload itself as a boolean, for commands that answer with a flag.
    pub fn bool_result(&self) -> Option<bool> {
        self.result.payload.as_bool()
    }

    /// Number of entities in a list payload.
    ///
    /// Returns `-1` when the payload is not a list, so that a single entity or a flag is
    /// never confused with an empty search result (`0`).
    pub fn count_results(&self) -> i64 {
        match &self.result.payload {
            Value::Array(entries) => entries.len() as i64,
            _ => -1,
        }
    }

    /// The payload as a single entity.
    pub fn dict(&self) -> Option<&Map<String, Value>> {
        self.result.payload.as_object()
    }

    /// Entity `index` of a list payload.
    pub fn dict_at(&self, index: usize) -> Option<&Map<String, Value>> {
        self.result.payload.as_array()?.get(index)?.as_object()
    }

    /// Attribute names of the single-entity payload, in no particular order.
    pub fn keys(&self) -> Option<Vec<&str>> {
        self.dict().map(keys)
    }

    /// Attribute names of entity `index` of a list payload, in no particular order.
    pub fn keys_at(&self, index: usize) -> Option<Vec<&str>> {
        self.dict_at(index).map(keys)
    }

    /// The normalized value list stored under `key` in the single-entity payload.
    pub fn get(&self, key: &str) -> Option<Vec<&Value>> {
        lookup(self.dict()?, key)
    }

    /// The normalized value list stored under `key` in entity `index` of a list payload.
    pub fn get_at(&self, index: usize, key: &str) -> Option<Vec<&Value>> {
        lookup(self.dict_at(index)?, key)
    }

    pub fn get_all<T: FromAttribute>(&self, key: &str) -> Option<Vec<T>> {
        project(&self.get(key)?)
    }

    pub fn get_one<T: FromAttribute>(&self, key: &str) -> Option<T> {
        self.get_all(key)?.into_iter().next()
    }

    pub fn get_all_at<T: FromAttribute>(&self, index: usize, key: &str) -> Option<Vec<T>> {
        project(&self.get_at(index, key)?)
    }

    pub fn get_one_at<T: FromAttribute>(&self, index: usize, key: &str) -> Option<T> {
        self.get_all_at(index, key)?.into_iter().next()
    }

    typed_accessors!(bool, get_bool, get_bools, get_bool_at, get_bools_at);
    typed_accessors!(String, get_string, get_strings, get_string_at, get_strings_at);
    typed_accessors!(Vec<u8>, get_binary, get_binaries, get_binary_at, get_binaries_at);
    typed_accessors!(
        DateTime<Utc>,
        get_datetime,
        get_datetimes,
        get_datetime_at,
        get_datetimes_at
    );
}

/// Fetches `key` from an entity, wrapping a bare value into a one-element list.
pub fn lookup<'a>(dict: &'a Map<String, Value>, key: &str) -> Option<Vec<&'a Value>> {
    match dict.get(key)? {
        Value::Array(values) => Some(values.iter().collect()),
        value => Some(vec![value]),
    }
}

fn keys(dict: &Map<String, Value>) -> Vec<&str> {
    dict.keys().map(String::as_str).collect()
}
