//! Configuration for artic-core
//!
//! Centralized configuration for the API endpoint, table layout, and
//! logging. Values come from defaults, an optional TOML file, and finally
//! command-line overrides applied by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

/// Default API root of the Art Institute of Chicago
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Rows shown per page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Application-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticConfig {
    /// Remote API settings
    pub api: ApiConfig,
    /// Table layout settings
    pub table: TableConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL; `/artworks` is appended
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("artic-browser/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Fixed number of rows per page
    pub page_size: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; the terminal is owned by the UI so logs never go to stdout
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("artic-tui.log"))
    }
}

impl ArticConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Standard config file location (`<config_dir>/artic-tui/config.toml`)
    pub fn standard_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("artic-tui").join("config.toml"))
    }

    /// Load from the standard location, falling back to defaults when the
    /// file does not exist
    pub fn load_standard() -> Result<Self, ConfigError> {
        match Self::standard_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {:?}", path);
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// The parsed API root
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.api.base_url, e)))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url()?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(self.api.base_url.clone()));
        }

        if self.table.page_size == 0 {
            return Err(ConfigError::OutOfRange(
                "page_size must be positive".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}
