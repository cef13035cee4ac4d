//! Validation at the server boundary and the serialization helpers for request bodies.

use log::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, ErrorKind, ValidationErrorKind};

/// Decodes a raw JSON value into `T`, reporting the path of the first field
/// that does not match.
pub fn validate<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        warn!("Response validation failed at `{}`: {}", path, err.inner());
        Error {
            source: Some(Box::new(err.into_inner())),
            error_kind: ErrorKind::Validation(ValidationErrorKind::Schema { path }),
        }
    })
}

/// Like [`validate`] for endpoints that answer with either a single object or
/// a one-element array wrapping it.
pub fn validate_single<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    validate(OneOrMany::from(value).into_single()?)
}

/// Serializes a request body, omitting everything the caller never set.
pub fn to_body<T: Serialize>(data: &T) -> Result<Value, Error> {
    serde_json::to_value(data).map_err(|err| Error {
        source: Some(Box::new(err)),
        error_kind: ErrorKind::Serialization,
    })
}

/// A response payload observed either bare or wrapped in an array.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// The bare value, or the first element of the array.
    ///
    /// An empty array is an error: there is no record to return.
    pub fn into_single(self) -> Result<T, Error> {
        match self {
            OneOrMany::One(item) => Ok(item),
            OneOrMany::Many(items) => items.into_iter().next().ok_or_else(|| {
                warn!("Expected a single record but the server returned an empty array");
                Error {
                    source: None,
                    error_kind: ErrorKind::Validation(ValidationErrorKind::Empty),
                }
            }),
        }
    }
}

impl From<Value> for OneOrMany<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => OneOrMany::Many(items),
            other => OneOrMany::One(other),
        }
    }
}

/// An optional request field that remembers whether the caller touched it.
///
/// `Unset` fields are skipped entirely when the body is serialized, `Null` is
/// sent as JSON `null` and `Set` carries a value. Combine with
/// `#[serde(default, skip_serializing_if = "Field::is_unset")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Unset,
    Null,
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Set(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Set(value),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Set(value) => value.serialize(serializer),
            Field::Null | Field::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
