/// Configuration file support
///
/// Read from `<config_dir>/lakha-x-pixel/config.json`:
/// - Linux: ~/.config/lakha-x-pixel/config.json
/// - macOS: ~/Library/Application Support/lakha-x-pixel/config.json
/// - Windows: %APPDATA%\lakha-x-pixel\config.json
///
/// Every field is optional; a missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Delay between an accepted upload and the result reveal
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 4500;

/// Filename offered by the save dialog
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "lakha-x-enhanced.png";

const MAX_PROCESSING_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fake processing duration in milliseconds
    pub processing_delay_ms: u64,
    /// Name pre-filled in the save dialog
    pub download_filename: String,
    /// `tracing` filter directive, e.g. "info" or "lakha_x_pixel=debug"
    pub log_level: String,
    /// Lowercase extensions the upload zone accepts
    pub accepted_extensions: Vec<String>,
    /// Largest file the upload zone accepts
    pub max_upload_bytes: u64,
    /// Longest edge of the decoded comparison preview
    pub preview_max_edge: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            download_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
            log_level: "info".to_string(),
            accepted_extensions: ["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_upload_bytes: 10 * 1024 * 1024,
            preview_max_edge: 1600,
        }
    }
}

impl AppConfig {
    /// Load the user config file.
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn load() -> AppResult<Option<Self>> {
        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Parse and validate a config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| AppError::config(path, e.to_string()))?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| AppError::config(path, e.to_string()))?;
        config
            .validate()
            .map_err(|message| AppError::config(path, message))?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.download_filename.trim().is_empty() {
            return Err("download_filename must not be empty".to_string());
        }
        if self.processing_delay_ms > MAX_PROCESSING_DELAY_MS {
            return Err(format!(
                "processing_delay_ms must be at most {MAX_PROCESSING_DELAY_MS}, got {}",
                self.processing_delay_ms
            ));
        }
        if self.accepted_extensions.is_empty() {
            return Err("accepted_extensions must list at least one extension".to_string());
        }
        if self.preview_max_edge == 0 {
            return Err("preview_max_edge must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

/// Location of the user config file
pub fn config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("lakha-x-pixel");
    path.push("config.json");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_reference_behavior() {
        let config = AppConfig::default();
        assert_eq!(config.processing_delay(), Duration::from_millis(4500));
        assert_eq!(config.download_filename, "lakha-x-enhanced.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(r#"{ "processing_delay_ms": 1000 }"#);
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.processing_delay_ms, 1000);
        assert_eq!(config.download_filename, DEFAULT_DOWNLOAD_FILENAME);
        assert_eq!(config.preview_max_edge, 1600);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let file = write_config("{ not json");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = write_config(r#"{ "download_filename": "  " }"#);
        assert!(AppConfig::from_file(file.path()).is_err());

        let file = write_config(r#"{ "processing_delay_ms": 600000 }"#);
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("processing_delay_ms"));

        let file = write_config(r#"{ "accepted_extensions": [] }"#);
        assert!(AppConfig::from_file(file.path()).is_err());
    }
}
