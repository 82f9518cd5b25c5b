//! Policy store trait and implementations

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::sync::RwLockExt;

/// Trait for policy store backend implementations
///
/// A store reads named policy values as one of four primitive kinds. Any
/// concrete backend (registry, plist, JSON file, environment) can implement
/// this without the resolution layer knowing.
///
/// Each reader must fail with [`Error::NoSuchKey`] when the key has no stored
/// value, and with other error variants for I/O, type-mismatch or parse
/// failures. The typed getters rely on that distinction: only `NoSuchKey`
/// triggers default substitution.
pub trait PolicyStore: Send + Sync {
    /// Read a string value
    fn read_string(&self, key: &str) -> Result<String>;

    /// Read an unsigned integer value
    fn read_u64(&self, key: &str) -> Result<u64>;

    /// Read a boolean value
    fn read_boolean(&self, key: &str) -> Result<bool>;

    /// Read an array of strings
    fn read_string_array(&self, key: &str) -> Result<Vec<String>>;
}

/// Name of a JSON value's kind, for type-mismatch errors
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// In-Memory Store Implementation
// =============================================================================

/// Policy store backed by an in-memory JSON value map
///
/// Useful for tests and for embedding policies delivered through some other
/// channel (the per-platform registry/plist backends live outside this
/// crate). Values are [`serde_json::Value`]s; numeric and boolean reads
/// additionally accept their string encodings, matching how registry-style
/// backends surface everything as text.
///
/// Cloning is cheap and clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a policy value, replacing any previous one
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.values
            .write_recovered()
            .insert(key.into(), value.into());
    }

    /// Set a policy value, consuming and returning the store for chaining
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove a policy value; subsequent reads of `key` see `NoSuchKey`
    pub fn remove(&self, key: &str) {
        self.values.write_recovered().remove(key);
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.values
            .read_recovered()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NoSuchKey(key.to_string()))
    }
}

impl PolicyStore for MemoryStore {
    fn read_string(&self, key: &str) -> Result<String> {
        match self.get(key)? {
            Value::String(s) => Ok(s),
            other => Err(Error::TypeMismatch {
                key: key.to_string(),
                expected: "string",
                actual: value_kind(&other).to_string(),
            }),
        }
    }

    fn read_u64(&self, key: &str) -> Result<u64> {
        let value = self.get(key)?;
        match &value {
            Value::Number(n) => n.as_u64().ok_or_else(|| Error::InvalidValue {
                key: key.to_string(),
                reason: format!("number {n} is not an unsigned 64-bit integer"),
            }),
            Value::String(s) => s.parse::<u64>().map_err(|e| Error::InvalidValue {
                key: key.to_string(),
                reason: format!("cannot parse '{s}' as u64: {e}"),
            }),
            _ => Err(Error::TypeMismatch {
                key: key.to_string(),
                expected: "number",
                actual: value_kind(&value).to_string(),
            }),
        }
    }

    fn read_boolean(&self, key: &str) -> Result<bool> {
        let value = self.get(key)?;
        match &value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(Error::InvalidValue {
                    key: key.to_string(),
                    reason: format!("cannot parse '{s}' as boolean"),
                }),
            },
            _ => Err(Error::TypeMismatch {
                key: key.to_string(),
                expected: "boolean",
                actual: value_kind(&value).to_string(),
            }),
        }
    }

    fn read_string_array(&self, key: &str) -> Result<Vec<String>> {
        let value = self.get(key)?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(Error::TypeMismatch {
                        key: key.to_string(),
                        expected: "string",
                        actual: value_kind(&other).to_string(),
                    }),
                })
                .collect(),
            // A lone string reads as a single-element array
            Value::String(s) => Ok(vec![s]),
            other => Err(Error::TypeMismatch {
                key: key.to_string(),
                expected: "array",
                actual: value_kind(&other).to_string(),
            }),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
