use std::path::Path;

use crate::analysis::AnalysisResult;
use crate::chunk::ChunkRecord;
use crate::error::{FrameworkError, Result};
use crate::options::Options;
use crate::strategy::ChunkStrategy;

/// Extension token of `path` in the form analyzers declare it: `".xml"`.
#[must_use]
pub fn format_token(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}

/// Produces an [`AnalysisResult`] from a document on disk.
///
/// Implementations must report failures only through [`FrameworkError`]:
/// `UnsupportedFormat` when the file's format is outside
/// [`Analyzer::supported_formats`], `Analysis` for everything else.
///
/// Both required methods must be provided; a partial implementation does not compile:
///
/// ```compile_fail
/// use std::path::Path;
/// use docframe_core::{AnalysisResult, Analyzer, Options, Result};
///
/// struct Partial;
///
/// impl Analyzer for Partial {
///     fn analyze(&self, _path: &Path, _options: &Options) -> Result<AnalysisResult> {
///         Ok(AnalysisResult::new("Partial", 1.0, "partial"))
///     }
/// }
/// ```
pub trait Analyzer: Send + Sync {
    /// # Errors
    ///
    /// `UnsupportedFormat` if the format cannot be handled, `Analysis` if
    /// processing fails.
    fn analyze(&self, path: &Path, options: &Options) -> Result<AnalysisResult>;

    /// Extension tokens with a leading dot, e.g. `[".xml", ".pdf"]`.
    ///
    /// Must not change over the lifetime of the instance.
    fn supported_formats(&self) -> &[&str];

    /// Case-insensitive match of the path's extension against the declared formats.
    fn supports(&self, path: &Path) -> bool {
        format_token(path).is_some_and(|token| {
            self.supported_formats()
                .iter()
                .any(|fmt| fmt.eq_ignore_ascii_case(&token))
        })
    }

    /// # Errors
    ///
    /// Returns `UnsupportedFormat` carrying `path` when [`Analyzer::supports`] is false.
    fn ensure_supported(&self, path: &Path) -> Result<()> {
        if self.supports(path) {
            return Ok(());
        }
        Err(FrameworkError::unsupported_format(format!(
            "Cannot analyze {}: supported formats are {}",
            path.display(),
            self.supported_formats().join(", ")
        ))
        .with_path(path))
    }
}

/// Splits a previously analyzed document into [`ChunkRecord`]s.
///
/// Output order is up to the implementation but must be identical for
/// identical inputs. An empty vector is a valid result.
///
/// ```compile_fail
/// use docframe_core::Chunker;
///
/// struct StrategiesOnly;
///
/// impl Chunker for StrategiesOnly {
///     fn supported_strategies(&self) -> &[&str] {
///         &["auto"]
///     }
/// }
/// ```
pub trait Chunker: Send + Sync {
    /// `path` must be the file `analysis` was computed from; this is not checked.
    ///
    /// # Errors
    ///
    /// Returns `Chunking` for an unsupported strategy or any processing failure.
    fn chunk(
        &self,
        path: &Path,
        analysis: &AnalysisResult,
        strategy: &str,
        options: &Options,
    ) -> Result<Vec<ChunkRecord>>;

    /// Strategy names accepted by [`Chunker::chunk`].
    fn supported_strategies(&self) -> &[&str];

    /// [`Chunker::chunk`] with [`ChunkStrategy::Auto`].
    ///
    /// # Errors
    ///
    /// Same as [`Chunker::chunk`].
    fn chunk_auto(
        &self,
        path: &Path,
        analysis: &AnalysisResult,
        options: &Options,
    ) -> Result<Vec<ChunkRecord>> {
        self.chunk(path, analysis, ChunkStrategy::Auto.as_str(), options)
    }

    fn supports_strategy(&self, strategy: &str) -> bool {
        self.supported_strategies().contains(&strategy)
    }

    /// # Errors
    ///
    /// Returns `Chunking` carrying `strategy` when it is not supported.
    fn ensure_strategy(&self, strategy: &str) -> Result<()> {
        if self.supports_strategy(strategy) {
            return Ok(());
        }
        Err(FrameworkError::chunking(format!(
            "Unknown chunking strategy: {strategy}"
        ))
        .with_strategy(strategy))
    }
}
