//! Shared contract for document analysis frameworks: analyzer and chunker
//! capabilities, the records they exchange, strategy names and errors.

pub mod analysis;
pub mod capability;
pub mod chunk;
pub mod error;
#[cfg(feature = "mock")]
pub mod mock;
pub mod options;
pub mod record;
pub mod strategy;

pub use analysis::AnalysisResult;
pub use capability::{Analyzer, Chunker, format_token};
pub use chunk::{ChunkRecord, DEFAULT_CHUNK_TYPE};
pub use error::{ErrorKind, FrameworkError, Result};
pub use options::{Options, OptionsError};
pub use record::{Record, RecordError};
pub use strategy::ChunkStrategy;
