//! Map-style access shared by the record types.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("'{key}' not found in {record}")]
    UnknownField { record: &'static str, key: String },

    #[error("malformed {record}: {source}")]
    Malformed {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A named-field value type that can also be read like a string-keyed map.
///
/// Implementors provide the field table and a per-key lookup; everything else
/// is derived from those two, so all views stay consistent with each other.
pub trait Record: Serialize + DeserializeOwned {
    const NAME: &'static str;

    /// Declared field names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Value of a declared field, `None` for anything else.
    ///
    /// Must return `Some` for every name in [`Record::FIELDS`].
    fn field(&self, key: &str) -> Option<Value>;

    /// Key-style access.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::UnknownField` if `key` is not a declared field.
    fn get(&self, key: &str) -> Result<Value, RecordError> {
        self.field(key).ok_or_else(|| RecordError::UnknownField {
            record: Self::NAME,
            key: key.to_owned(),
        })
    }

    #[must_use]
    fn get_or(&self, key: &str, default: Value) -> Value {
        self.field(key).unwrap_or(default)
    }

    #[must_use]
    fn contains_key(&self, key: &str) -> bool {
        Self::FIELDS.contains(&key)
    }

    #[must_use]
    fn keys(&self) -> &'static [&'static str] {
        Self::FIELDS
    }

    #[must_use]
    fn values(&self) -> Vec<Value> {
        self.items().into_iter().map(|(_, v)| v).collect()
    }

    /// One entry per declared field. A declared field that `field` cannot
    /// resolve reads as `null`, so the key set never shrinks.
    #[must_use]
    fn items(&self) -> Vec<(&'static str, Value)> {
        Self::FIELDS
            .iter()
            .map(|&key| {
                let value = self.field(key);
                debug_assert!(
                    value.is_some(),
                    "{} declares field {key} but field() does not resolve it",
                    Self::NAME
                );
                (key, value.unwrap_or(Value::Null))
            })
            .collect()
    }

    /// Deep conversion into an owned, ordered map. The key set is exactly
    /// [`Record::FIELDS`].
    #[must_use]
    fn to_map(&self) -> Map<String, Value> {
        self.items()
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect()
    }

    /// Rebuild a record from the shape produced by [`Record::to_map`].
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Malformed` if a required field is missing, a
    /// value has the wrong type, or the map carries an undeclared key.
    fn from_map(map: Map<String, Value>) -> Result<Self, RecordError> {
        serde_json::from_value(Value::Object(map)).map_err(|source| RecordError::Malformed {
            record: Self::NAME,
            source,
        })
    }
}
