//! Shared interfaces for document analysis frameworks.
//!
//! Frameworks implement [`Analyzer`] (and optionally [`Chunker`]) and exchange
//! [`AnalysisResult`] and [`ChunkRecord`] values, so callers can swap one
//! framework for another or let a [`FrameworkRegistry`] pick by file format.
//!
//! ```
//! use std::path::Path;
//!
//! use docframe::{AnalysisResult, Analyzer, FrameworkRegistry, Options, Result};
//!
//! struct TextAnalyzer;
//!
//! impl Analyzer for TextAnalyzer {
//!     fn analyze(&self, path: &Path, _options: &Options) -> Result<AnalysisResult> {
//!         self.ensure_supported(path)?;
//!         Ok(AnalysisResult::new("Example Document", 0.95, "example-framework"))
//!     }
//!
//!     fn supported_formats(&self) -> &[&str] {
//!         &[".txt", ".md"]
//!     }
//! }
//!
//! let mut registry = FrameworkRegistry::new();
//! registry.register_analyzer("example-framework", TextAnalyzer)?;
//! let result = registry.analyze(Path::new("notes.md"), &Options::new())?;
//! assert_eq!(result.document_type, "Example Document");
//! # Ok::<(), docframe::FrameworkError>(())
//! ```

pub use docframe_core::{
    AnalysisResult, Analyzer, ChunkRecord, ChunkStrategy, Chunker, DEFAULT_CHUNK_TYPE, ErrorKind,
    FrameworkError, Options, OptionsError, Record, RecordError, Result, format_token,
};
pub use docframe_registry::{ConfigError, FrameworkConfig, FrameworkRegistry, RegistryConfig};

#[cfg(feature = "mock")]
pub use docframe_core::mock;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
