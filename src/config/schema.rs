//! Field checks over parsed JSON objects
//!
//! Both configuration files are validated the same way: walk a fixed list
//! of required keys and stop at the first one that is missing or has the
//! wrong JSON type. Extra keys are ignored.

use serde_json::{Map, Value};

use crate::error::{SbError, SbResult};

/// Human-readable name of a JSON value's type
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A JSON object together with the location it was found at
///
/// The scope prefixes field names in error messages, e.g. `classes[2]`.
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    scope: String,
}

impl<'a> Fields<'a> {
    /// Wrap a top-level document, which must be an object
    pub fn root(value: &'a Value) -> SbResult<Self> {
        Self::scoped(value, String::new())
    }

    /// Wrap a nested value found at `scope`
    pub fn scoped(value: &'a Value, scope: impl Into<String>) -> SbResult<Self> {
        let scope = scope.into();
        match value {
            Value::Object(object) => Ok(Self { object, scope }),
            other => {
                let location = if scope.is_empty() {
                    "<root>".to_string()
                } else {
                    scope
                };
                Err(SbError::wrong_type(location, "object", type_name(other)))
            }
        }
    }

    /// Full location of a key within this object
    pub fn location(&self, key: &str) -> String {
        if self.scope.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.scope, key)
        }
    }

    fn require(&self, key: &str, expected: &str) -> SbResult<&'a Value> {
        self.object
            .get(key)
            .ok_or_else(|| SbError::missing_field(self.location(key), expected))
    }

    pub fn require_str(&self, key: &str) -> SbResult<&'a str> {
        match self.require(key, "string")? {
            Value::String(s) => Ok(s.as_str()),
            other => Err(SbError::wrong_type(self.location(key), "string", type_name(other))),
        }
    }

    pub fn require_array(&self, key: &str) -> SbResult<&'a [Value]> {
        match self.require(key, "array")? {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(SbError::wrong_type(self.location(key), "array", type_name(other))),
        }
    }

    /// Integer field; floats such as `8080.0` are rejected
    pub fn require_i64(&self, key: &str) -> SbResult<i64> {
        let value = self.require(key, "integer")?;
        if let Some(n) = value.as_i64() {
            return Ok(n);
        }
        match value.as_u64() {
            Some(n) => Err(SbError::Schema {
                location: self.location(key),
                reason: format!("integer {} is out of range", n),
            }),
            None => Err(SbError::wrong_type(self.location(key), "integer", type_name(value))),
        }
    }

    pub fn require_bool(&self, key: &str) -> SbResult<bool> {
        match self.require(key, "boolean")? {
            Value::Bool(b) => Ok(*b),
            other => Err(SbError::wrong_type(self.location(key), "boolean", type_name(other))),
        }
    }

    /// Array field whose elements must all be strings
    pub fn require_str_array(&self, key: &str) -> SbResult<Vec<String>> {
        self.require_array(key)?
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(SbError::wrong_type(
                    format!("{}[{}]", self.location(key), i),
                    "string",
                    type_name(other),
                )),
            })
            .collect()
    }
}
