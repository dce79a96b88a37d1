use std::collections::HashMap;
use std::path::Path;

use docframe_core::Options;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_true() -> bool {
    true
}

/// Registry configuration, keyed by framework name.
///
/// ```toml
/// [frameworks.xml-analysis-framework]
/// enabled = true
///
/// [frameworks.xml-analysis-framework.options]
/// max_depth = 8
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub frameworks: HashMap<String, FrameworkConfig>,
}

/// Per-framework switch and default options.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameworkConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Merged under the caller's options on every dispatch.
    #[serde(default)]
    pub options: Options,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            options: Options::default(),
        }
    }
}

impl RegistryConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` if the document is not valid registry TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Frameworks without an entry are enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.frameworks.get(name).is_none_or(|f| f.enabled)
    }

    #[must_use]
    pub fn options_for(&self, name: &str) -> Options {
        self.frameworks
            .get(name)
            .map(|f| f.options.clone())
            .unwrap_or_default()
    }
}
