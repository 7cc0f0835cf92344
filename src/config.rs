//! TOML configuration with layered loading.
//!
//! Precedence, lowest first: built-in defaults, TOML file, environment
//! (`ACCESSIBLE_SHADES_*`, `__` separates nested keys), command-line flags.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::logging::DEFAULT_LOG_LEVEL;
use crate::variant::SearchOptions;
use crate::wcag::{ContrastRequirements, Level};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ACCESSIBLE_SHADES_";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered extraction failed
    Extract(Box<figment::Error>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Extract(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

/// Structured output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Contrast requirements
    pub contrast: ContrastConfig,
    /// Variant search settings
    pub search: SearchConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Log destination and verbosity
    pub logging: LoggingConfig,
}

/// Contrast settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Conformance level (AA or AAA)
    pub level: Level,
    /// Judge pairs as large text
    pub large_text: bool,
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lightness step between candidates
    pub step: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step: SearchOptions::default().step,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file (default: accessible-shades.log in the working directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Sparse overrides; unset fields leave lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub contrast: ContrastOverrides,
    pub search: SearchOverrides,
    pub output: OutputOverrides,
    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContrastOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl AppConfig {
    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the layered provider without extracting it.
    pub fn figment(file: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file_exact(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides))
    }

    /// Resolve the effective configuration from every layer.
    pub fn resolve(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Ok(Self::figment(file, overrides).extract()?)
    }

    pub fn requirements(&self) -> ContrastRequirements {
        ContrastRequirements::new(self.contrast.level, self.contrast.large_text)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            step: self.search.step,
        }
    }
}
