use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("unrecognized option: {0}")]
    Unrecognized(String),

    #[error("invalid options: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("TOML parse failed: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Implementation-defined configuration passed to every capability call.
///
/// The contract does not interpret the keys. Each implementation declares its
/// own configuration type and extracts it with [`Options::parse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Layer `overrides` on top of `self`; keys present in both take the
    /// override's value.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut out = self.clone();
        for (key, value) in &overrides.0 {
            out.0.insert(key.clone(), value.clone());
        }
        out
    }

    /// Extract an implementation's typed configuration.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Invalid` if the bag does not deserialize into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, OptionsError> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }

    /// Fail on the first key outside `recognized`.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Unrecognized` naming the offending key.
    pub fn reject_unrecognized(&self, recognized: &[&str]) -> Result<(), OptionsError> {
        match self.0.keys().find(|k| !recognized.contains(&k.as_str())) {
            Some(key) => Err(OptionsError::Unrecognized(key.clone())),
            None => Ok(()),
        }
    }

    /// # Errors
    ///
    /// Returns `OptionsError::Toml` if `s` is not a valid TOML table.
    pub fn from_toml_str(s: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(s)?)
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
