use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FrameworkError;

/// Standard chunking strategy names.
///
/// A shared vocabulary only: no framework is required to support all of them,
/// and implementations may accept private names of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkStrategy {
    /// The framework picks the best strategy.
    #[default]
    Auto,
    /// Sections and headings.
    Hierarchical,
    /// Fixed-size overlapping windows.
    SlidingWindow,
    /// Semantic boundaries.
    ContentAware,
    /// Structural elements such as paragraphs and tables.
    Structural,
    /// Tables and tabular data get dedicated handling.
    TableAware,
    /// Page boundaries of paginated documents.
    PageAware,
}

impl ChunkStrategy {
    pub const ALL: [Self; 7] = [
        Self::Auto,
        Self::Hierarchical,
        Self::SlidingWindow,
        Self::ContentAware,
        Self::Structural,
        Self::TableAware,
        Self::PageAware,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Hierarchical => "hierarchical",
            Self::SlidingWindow => "sliding_window",
            Self::ContentAware => "content_aware",
            Self::Structural => "structural",
            Self::TableAware => "table_aware",
            Self::PageAware => "page_aware",
        }
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkStrategy {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                FrameworkError::chunking(format!("Unknown chunking strategy: {s}"))
                    .with_strategy(s)
            })
    }
}

impl AsRef<str> for ChunkStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ChunkStrategy {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ChunkStrategy {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for ChunkStrategy {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<ChunkStrategy> for str {
    fn eq(&self, other: &ChunkStrategy) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<ChunkStrategy> for &str {
    fn eq(&self, other: &ChunkStrategy) -> bool {
        *self == other.as_str()
    }
}
