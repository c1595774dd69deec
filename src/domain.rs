//! Core configuration types
//!
//! A configuration is an ordered mapping from key to value. The key set is
//! open: anything a connection-string query or fallback file carries is kept
//! alongside the recognized Cloudinary keys, whatever its shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const CLOUD_NAME: &str = "cloud_name";
pub const API_KEY: &str = "api_key";
pub const API_SECRET: &str = "api_secret";
pub const PRIVATE_CDN: &str = "private_cdn";
pub const SECURE_DISTRIBUTION: &str = "secure_distribution";

/// Keys that always hold text, even when a fallback file writes them as numbers.
pub const STRING_KEYS: [&str; 4] = [CLOUD_NAME, API_KEY, API_SECRET, SECURE_DISTRIBUTION];

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<ConfigValue>),
    Table(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Interpret free-form text (e.g. a CLI override): `true`/`false` become
    /// booleans, everything else stays a string.
    pub fn infer(text: &str) -> Self {
        match text {
            "true" => ConfigValue::Bool(true),
            "false" => ConfigValue::Bool(false),
            other => ConfigValue::String(other.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Integer(i) => write!(f, "{i}"),
            ConfigValue::Float(x) => write!(f, "{x}"),
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Array(_) | ConfigValue::Table(_) => {
                f.write_str(&serde_json::to_string(self).map_err(|_| fmt::Error)?)
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

/// Key/value configuration; values may nest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    entries: BTreeMap<String, ConfigValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Insert or overwrite a key, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Rewrite numeric values of [`STRING_KEYS`] as text, e.g. an unquoted
    /// all-digit `api_key`.
    pub fn stringify_known_keys(&mut self) {
        for key in STRING_KEYS {
            if let Some(value) = self.entries.get_mut(key) {
                if matches!(value, ConfigValue::Integer(_) | ConfigValue::Float(_)) {
                    *value = ConfigValue::String(value.to_string());
                }
            }
        }
    }

    /// Shallow merge: every key in `other` overwrites the same key here.
    pub fn merge(&mut self, other: Configuration) {
        self.entries.extend(other.entries);
    }

    pub fn cloud_name(&self) -> Option<&str> {
        self.get(CLOUD_NAME).and_then(ConfigValue::as_str)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.get(API_KEY).and_then(ConfigValue::as_str)
    }

    pub fn api_secret(&self) -> Option<&str> {
        self.get(API_SECRET).and_then(ConfigValue::as_str)
    }

    /// `false` unless the key holds boolean `true`.
    pub fn private_cdn(&self) -> bool {
        self.get(PRIVATE_CDN).and_then(ConfigValue::as_bool).unwrap_or(false)
    }

    pub fn secure_distribution(&self) -> Option<&str> {
        self.get(SECURE_DISTRIBUTION).and_then(ConfigValue::as_str)
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl IntoIterator for Configuration {
    type Item = (String, ConfigValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
