use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::Record;

pub const DEFAULT_CHUNK_TYPE: &str = "text";

fn default_chunk_type() -> String {
    DEFAULT_CHUNK_TYPE.to_owned()
}

/// One piece of a document, ready for embedding or vector storage.
///
/// `chunk_id` should be unique within a document's chunk set; producers are
/// responsible for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChunkRecord {
    pub chunk_id: String,
    pub content: String,
    /// Position, section path, page and similar per-chunk details.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Estimated token count for LLM context budgeting.
    #[serde(default)]
    pub token_count: u64,
    /// `"text"`, `"code"`, `"table"`, `"heading"`, ...
    #[serde(default = "default_chunk_type")]
    pub chunk_type: String,
}

impl ChunkRecord {
    pub fn new(chunk_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            content: content.into(),
            metadata: Map::new(),
            token_count: 0,
            chunk_type: default_chunk_type(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_token_count(mut self, token_count: u64) -> Self {
        self.token_count = token_count;
        self
    }

    #[must_use]
    pub fn with_chunk_type(mut self, chunk_type: impl Into<String>) -> Self {
        self.chunk_type = chunk_type.into();
        self
    }
}

impl Record for ChunkRecord {
    const NAME: &'static str = "ChunkRecord";
    const FIELDS: &'static [&'static str] =
        &["chunk_id", "content", "metadata", "token_count", "chunk_type"];

    fn field(&self, key: &str) -> Option<Value> {
        let value = match key {
            "chunk_id" => Value::from(self.chunk_id.as_str()),
            "content" => Value::from(self.content.as_str()),
            "metadata" => Value::Object(self.metadata.clone()),
            "token_count" => Value::from(self.token_count),
            "chunk_type" => Value::from(self.chunk_type.as_str()),
            _ => return None,
        };
        Some(value)
    }
}
