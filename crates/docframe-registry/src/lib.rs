//! Registry of analysis frameworks with format-based dispatch and TOML configuration.

mod config;
mod registry;

pub use config::{ConfigError, FrameworkConfig, RegistryConfig};
pub use registry::FrameworkRegistry;
