use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::RawFlagError;

/// An already-encoded flag value. Stored and round-tripped by rules without
/// being interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFlag {
    node: Value,
}

impl RawFlag {
    /// Wrap a JSON node as-is.
    #[must_use]
    pub fn from_json_node(node: Value) -> Self {
        Self { node }
    }

    /// Parse JSON text into a raw flag.
    ///
    /// # Errors
    ///
    /// Returns [`RawFlagError::Json`] if `json` is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, RawFlagError> {
        Ok(Self::from_json_node(serde_json::from_str(json)?))
    }

    #[must_use]
    pub fn as_json_node(&self) -> Value {
        self.node.clone()
    }

    #[must_use]
    pub fn as_json(&self) -> String {
        self.node.to_string()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.node.is_null()
    }

    /// Deserialize the value into a concrete type.
    ///
    /// # Errors
    ///
    /// Returns [`RawFlagError::Shape`] if the JSON does not fit `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, RawFlagError> {
        serde_json::from_value::<T>(self.node.clone()).map_err(|e| RawFlagError::Shape {
            json: self.as_json(),
            expected: std::any::type_name::<T>(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for RawFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)
    }
}

impl From<Value> for RawFlag {
    fn from(node: Value) -> Self {
        Self::from_json_node(node)
    }
}

impl From<bool> for RawFlag {
    fn from(v: bool) -> Self {
        Self::from_json_node(Value::Bool(v))
    }
}

impl From<i64> for RawFlag {
    fn from(v: i64) -> Self {
        Self::from_json_node(Value::from(v))
    }
}

impl From<&str> for RawFlag {
    fn from(v: &str) -> Self {
        Self::from_json_node(Value::String(v.to_owned()))
    }
}

/// Turns the `value` field of a wire rule into a [`RawFlag`].
pub trait RawFlagDecoder {
    /// # Errors
    ///
    /// Returns [`RawFlagError`] if `node` is not a valid value for the flag.
    fn from_json_node(&self, node: Value) -> Result<RawFlag, RawFlagError>;
}

/// Accepts any JSON value.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNodeDecoder;

impl RawFlagDecoder for JsonNodeDecoder {
    fn from_json_node(&self, node: Value) -> Result<RawFlag, RawFlagError> {
        Ok(RawFlag::from_json_node(node))
    }
}

/// Accepts only JSON values that deserialize into `T`. The stored raw flag is
/// still the original JSON.
#[derive(Debug, Clone, Copy)]
pub struct TypedDecoder<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> TypedDecoder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for TypedDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> RawFlagDecoder for TypedDecoder<T> {
    fn from_json_node(&self, node: Value) -> Result<RawFlag, RawFlagError> {
        let raw = RawFlag::from_json_node(node);
        raw.decode::<T>()?;
        Ok(raw)
    }
}
