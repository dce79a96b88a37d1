//! Test-only canned analyzer and chunker.

use std::path::Path;

use crate::analysis::AnalysisResult;
use crate::capability::{Analyzer, Chunker};
use crate::chunk::ChunkRecord;
use crate::error::{FrameworkError, Result};
use crate::options::Options;

#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    pub formats: Vec<&'static str>,
    pub result: AnalysisResult,
    /// Return `Analysis` errors for supported files.
    pub fail: bool,
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self {
            formats: vec![".txt"],
            result: AnalysisResult::new("Mock Document", 1.0, "mock"),
            fail: false,
        }
    }
}

impl MockAnalyzer {
    #[must_use]
    pub fn with_formats(formats: Vec<&'static str>) -> Self {
        Self {
            formats,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_result(mut self, result: AnalysisResult) -> Self {
        self.result = result;
        self
    }
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, path: &Path, _options: &Options) -> Result<AnalysisResult> {
        self.ensure_supported(path)?;
        if self.fail {
            return Err(FrameworkError::analysis("mock analysis error").with_path(path));
        }
        Ok(self.result.clone())
    }

    fn supported_formats(&self) -> &[&str] {
        &self.formats
    }
}

#[derive(Debug, Clone)]
pub struct MockChunker {
    pub strategies: Vec<&'static str>,
    pub chunks: Vec<ChunkRecord>,
    /// Return `Chunking` errors for supported strategies.
    pub fail: bool,
}

impl Default for MockChunker {
    fn default() -> Self {
        Self {
            strategies: vec!["auto"],
            chunks: vec![ChunkRecord::new("chunk_1", "mock content")],
            fail: false,
        }
    }
}

impl MockChunker {
    #[must_use]
    pub fn with_chunks(chunks: Vec<ChunkRecord>) -> Self {
        Self {
            chunks,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<&'static str>) -> Self {
        self.strategies = strategies;
        self
    }
}

impl Chunker for MockChunker {
    fn chunk(
        &self,
        _path: &Path,
        _analysis: &AnalysisResult,
        strategy: &str,
        _options: &Options,
    ) -> Result<Vec<ChunkRecord>> {
        self.ensure_strategy(strategy)?;
        if self.fail {
            return Err(FrameworkError::chunking("mock chunking error").with_strategy(strategy));
        }
        Ok(self.chunks.clone())
    }

    fn supported_strategies(&self) -> &[&str] {
        &self.strategies
    }
}
