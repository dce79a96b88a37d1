use std::path::Path;

use docframe_core::{
    AnalysisResult, Analyzer, ChunkRecord, Chunker, FrameworkError, Options, Result,
};
use tracing::{debug, trace, warn};

use crate::config::RegistryConfig;

struct Entry {
    name: String,
    analyzer: Box<dyn Analyzer>,
    chunker: Option<Box<dyn Chunker>>,
}

/// Frameworks registered under their identifier, consulted in registration order.
///
/// Registration validates each implementation's declared capabilities so a
/// framework that advertises nothing never becomes a dispatch candidate.
#[derive(Default)]
pub struct FrameworkRegistry {
    entries: Vec<Entry>,
    config: RegistryConfig,
}

impl std::fmt::Debug for FrameworkRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameworkRegistry")
            .field("frameworks", &self.frameworks())
            .field("config", &self.config)
            .finish()
    }
}

fn validate_format(token: &str) -> bool {
    token.len() > 1 && token.starts_with('.') && !token[1..].contains(['.', '/', '\\'])
}

impl FrameworkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// # Errors
    ///
    /// Returns `FrameworkError::Other` if the name is empty or taken, or the
    /// analyzer declares no formats or a malformed format token.
    pub fn register_analyzer(
        &mut self,
        name: impl Into<String>,
        analyzer: impl Analyzer + 'static,
    ) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FrameworkError::other("framework name must not be empty"));
        }
        if self.entry(&name).is_some() {
            return Err(FrameworkError::other(format!(
                "framework already registered: {name}"
            )));
        }

        let formats = analyzer.supported_formats();
        if formats.is_empty() {
            return Err(FrameworkError::other(format!(
                "analyzer for {name} declares no supported formats"
            )));
        }
        if let Some(bad) = formats.iter().find(|f| !validate_format(f)) {
            return Err(FrameworkError::other(format!(
                "analyzer for {name} declares malformed format {bad:?}, expected e.g. \".xml\""
            )));
        }

        debug!(framework = %name, formats = ?formats, "registered analyzer");
        self.entries.push(Entry {
            name,
            analyzer: Box::new(analyzer),
            chunker: None,
        });
        Ok(())
    }

    /// Attach a chunker to an already registered framework.
    ///
    /// # Errors
    ///
    /// Returns `FrameworkError::Other` if the framework is unknown, already has
    /// a chunker, or the chunker declares no strategies.
    pub fn register_chunker(&mut self, name: &str, chunker: impl Chunker + 'static) -> Result<()> {
        let strategies = chunker.supported_strategies();
        if strategies.is_empty() {
            return Err(FrameworkError::other(format!(
                "chunker for {name} declares no supported strategies"
            )));
        }
        debug!(framework = %name, strategies = ?strategies, "registered chunker");

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| {
                FrameworkError::other(format!(
                    "no analyzer registered for {name}; register it before its chunker"
                ))
            })?;
        if entry.chunker.is_some() {
            return Err(FrameworkError::other(format!(
                "chunker already registered for {name}"
            )));
        }
        entry.chunker = Some(Box::new(chunker));
        Ok(())
    }

    #[must_use]
    pub fn frameworks(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entry(name).is_some() && self.config.is_enabled(name)
    }

    /// Union of the formats of every enabled framework, first occurrence wins.
    #[must_use]
    pub fn supported_formats(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in self.enabled() {
            for &fmt in entry.analyzer.supported_formats() {
                if !out.iter().any(|f| f.eq_ignore_ascii_case(fmt)) {
                    out.push(fmt);
                }
            }
        }
        out
    }

    #[must_use]
    pub fn analyzer(&self, name: &str) -> Option<&dyn Analyzer> {
        self.entry(name).map(|e| e.analyzer.as_ref())
    }

    #[must_use]
    pub fn chunker(&self, name: &str) -> Option<&dyn Chunker> {
        self.entry(name).and_then(|e| e.chunker.as_deref())
    }

    /// Analyze `path` with the first enabled framework that handles it.
    ///
    /// A framework answering `UnsupportedFormat` hands over to the next
    /// candidate; any other failure is returned as is. The result's
    /// `framework` is set to the name the framework was registered under, so
    /// [`FrameworkRegistry::chunk`] routes back to the same entry.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` if no enabled framework accepts the file, otherwise
    /// whatever the selected analyzer returns.
    pub fn analyze(&self, path: &Path, overrides: &Options) -> Result<AnalysisResult> {
        let mut last_unsupported = None;
        for entry in self.enabled().filter(|e| e.analyzer.supports(path)) {
            let options = self.config.options_for(&entry.name).merged(overrides);
            debug!(framework = %entry.name, path = %path.display(), "dispatching analysis");
            match entry.analyzer.analyze(path, &options) {
                Ok(mut result) => {
                    if result.framework != entry.name {
                        debug!(
                            framework = %entry.name,
                            reported = %result.framework,
                            "analyzer reported a different framework name, using the registered one"
                        );
                        result.framework.clone_from(&entry.name);
                    }
                    trace!(
                        framework = %entry.name,
                        document_type = %result.document_type,
                        confidence = result.confidence,
                        "analysis complete"
                    );
                    return Ok(result);
                }
                Err(err) if err.is_unsupported_format() => {
                    warn!(framework = %entry.name, error = %err, "framework declined file, trying next");
                    last_unsupported = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_unsupported.unwrap_or_else(|| {
            FrameworkError::unsupported_format(format!(
                "no registered framework supports {}",
                path.display()
            ))
            .with_path(path)
        }))
    }

    /// Chunk with the framework that produced `analysis`.
    ///
    /// # Errors
    ///
    /// `Chunking` if that framework is unknown, disabled or has no chunker,
    /// otherwise whatever the chunker returns.
    pub fn chunk(
        &self,
        path: &Path,
        analysis: &AnalysisResult,
        strategy: &str,
        overrides: &Options,
    ) -> Result<Vec<ChunkRecord>> {
        let name = analysis.framework.as_str();
        let chunker = self
            .enabled()
            .find(|e| e.name == name)
            .and_then(|e| e.chunker.as_deref())
            .ok_or_else(|| {
                FrameworkError::chunking(format!("no chunker available for framework {name}"))
                    .with_path(path)
                    .with_strategy(strategy)
            })?;

        chunker.ensure_strategy(strategy)?;
        let options = self.config.options_for(name).merged(overrides);
        debug!(framework = %name, strategy, path = %path.display(), "dispatching chunking");
        let chunks = chunker.chunk(path, analysis, strategy, &options)?;
        trace!(framework = %name, count = chunks.len(), "chunking complete");
        Ok(chunks)
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    fn enabled(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|e| self.config.is_enabled(&e.name))
    }
}
