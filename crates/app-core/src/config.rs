//! Application configuration
//!
//! Configuration is read once at startup from an optional JSON file. Every
//! field has a default, so an empty object (or no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::profile::DEFAULT_PROFILE_IMAGE_URL;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Field value rejected
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Profile picture URL
    pub profile_image_url: String,
    /// Start in dark theme
    pub dark_theme: bool,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_image_url: DEFAULT_PROFILE_IMAGE_URL.to_string(),
            dark_theme: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Set the profile picture URL
    pub fn with_profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = url.into();
        self
    }

    /// Set the initial theme
    pub fn with_dark_theme(mut self, dark: bool) -> Self {
        self.dark_theme = dark;
        self
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        let url = self.profile_image_url.as_str();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "profileImageUrl",
                reason: format!("expected an http(s) URL, got {:?}", url),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logFilter",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
