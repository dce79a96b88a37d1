use std::fmt;
use std::path::{Path, PathBuf};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The only error type a capability implementation may return.
///
/// Matching `Err(_)` intercepts every contract failure; matching a variant
/// narrows to one leaf kind. `Display` renders the message verbatim.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The input lies outside the implementation's declared formats.
    #[error("{message}")]
    UnsupportedFormat {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxError>,
    },

    /// Analysis failed: malformed input, I/O failure, internal fault.
    #[error("{message}")]
    Analysis {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxError>,
    },

    /// Chunking failed: unknown strategy or processing failure.
    #[error("{message}")]
    Chunking {
        message: String,
        path: Option<PathBuf>,
        strategy: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// Contract violation not covered by a leaf kind.
    #[error("{message}")]
    Other {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxError>,
    },
}

pub type Result<T> = std::result::Result<T, FrameworkError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Framework,
    UnsupportedFormat,
    Analysis,
    Chunking,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Framework => "FrameworkError",
            Self::UnsupportedFormat => "UnsupportedFormatError",
            Self::Analysis => "AnalysisError",
            Self::Chunking => "ChunkingError",
        }
    }

    /// Whether an error of this kind is caught by a handler for `parent`.
    ///
    /// Every kind is a `Framework` error; leaves are only themselves.
    #[must_use]
    pub fn is_a(self, parent: Self) -> bool {
        parent == Self::Framework || self == parent
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FrameworkError {
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    pub fn chunking(message: impl Into<String>) -> Self {
        Self::Chunking {
            message: message.into(),
            path: None,
            strategy: None,
            source: None,
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Attach the path that triggered the error.
    #[must_use]
    pub fn with_path(mut self, value: impl AsRef<Path>) -> Self {
        match &mut self {
            Self::UnsupportedFormat { path, .. }
            | Self::Analysis { path, .. }
            | Self::Chunking { path, .. }
            | Self::Other { path, .. } => *path = Some(value.as_ref().to_path_buf()),
        }
        self
    }

    /// Attach the strategy name that triggered a chunking error.
    ///
    /// Only `Chunking` has a strategy; on any other kind the error is
    /// returned unchanged and [`FrameworkError::strategy`] stays `None`.
    #[must_use]
    pub fn with_strategy(mut self, value: impl Into<String>) -> Self {
        if let Self::Chunking { strategy, .. } = &mut self {
            *strategy = Some(value.into());
        }
        self
    }

    /// Attach the underlying cause, reported by [`std::error::Error::source`].
    #[must_use]
    pub fn with_source(
        mut self,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        match &mut self {
            Self::UnsupportedFormat { source, .. }
            | Self::Analysis { source, .. }
            | Self::Chunking { source, .. }
            | Self::Other { source, .. } => *source = Some(Box::new(cause)),
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::Analysis { .. } => ErrorKind::Analysis,
            Self::Chunking { .. } => ErrorKind::Chunking,
            Self::Other { .. } => ErrorKind::Framework,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::UnsupportedFormat { message, .. }
            | Self::Analysis { message, .. }
            | Self::Chunking { message, .. }
            | Self::Other { message, .. } => message,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::UnsupportedFormat { path, .. }
            | Self::Analysis { path, .. }
            | Self::Chunking { path, .. }
            | Self::Other { path, .. } => path.as_deref(),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Option<&str> {
        match self {
            Self::Chunking { strategy, .. } => strategy.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
