//! Parameter store abstraction
//!
//! The node reads its settings from an external key/value service (a ROS
//! parameter server, a flash-backed registry, a file loaded by host tooling).
//! This module only fixes the contract the accessors rely on:
//!
//! - `has_param(key)`: existence check
//! - `get_param(key)`: typed read, `None` when missing
//! - `set_param(key, value)`: write, used only by the boolean declare path
//!
//! [`MemoryParamStore`] is the in-process implementation used by tests and by
//! host tools that load a parameter file.
//!
//! ## Concurrency
//!
//! The trait performs no synchronization. Reads take `&self`, writes take
//! `&mut self`; a store shared between threads must be wrapped by its owner.

use alloc::{collections::BTreeMap, string::String};

use super::value::ParamValue;

/// Key/value parameter store consumed by the accessors
pub trait ParamStore {
    /// Fetch the value stored under `key`
    fn get_param(&self, key: &str) -> Option<ParamValue>;

    /// Store `value` under `key`, replacing any previous value
    fn set_param(&mut self, key: &str, value: ParamValue);

    /// Check whether `key` exists
    fn has_param(&self, key: &str) -> bool {
        self.get_param(key).is_some()
    }
}

/// Ordered in-memory parameter store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryParamStore {
    params: BTreeMap<String, ParamValue>,
}

impl MemoryParamStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(String::from(key), value.into());
        self
    }

    /// Remove `key`, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.params.remove(key)
    }

    /// Number of stored parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if no parameters are stored
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Load a store from a JSON object
    ///
    /// Nested objects become `/`-separated namespaces, so
    /// `{"nav": {"rate": 1}}` is stored under `nav/rate`. An integer beyond
    /// the `i64` store range fails the load rather than being kept as a
    /// lossy float.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let root: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut store = Self::new();
        store.load_object("", root)?;
        Ok(store)
    }

    #[cfg(feature = "json")]
    fn load_object(
        &mut self,
        prefix: &str,
        object: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), serde_json::Error> {
        use serde::{de::Error as _, Deserialize};

        for (name, value) in object {
            let key = if prefix.is_empty() {
                name
            } else {
                alloc::format!("{prefix}/{name}")
            };
            match value {
                serde_json::Value::Object(nested) => self.load_object(&key, nested)?,
                other => {
                    if let Some(n) = unrepresentable_integer(&other) {
                        return Err(serde_json::Error::custom(alloc::format!(
                            "parameter '{key}': integer {n} exceeds the i64 range"
                        )));
                    }
                    let value = ParamValue::deserialize(other)?;
                    self.params.insert(key, value);
                }
            }
        }
        Ok(())
    }
}

/// First integer in `value` that only fits `u64`
#[cfg(feature = "json")]
fn unrepresentable_integer(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) if !n.is_i64() => n.as_u64(),
        serde_json::Value::Array(items) => items.iter().find_map(unrepresentable_integer),
        _ => None,
    }
}

impl ParamStore for MemoryParamStore {
    fn get_param(&self, key: &str) -> Option<ParamValue> {
        self.params.get(key).cloned()
    }

    fn set_param(&mut self, key: &str, value: ParamValue) {
        self.params.insert(String::from(key), value);
    }

    fn has_param(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }
}
