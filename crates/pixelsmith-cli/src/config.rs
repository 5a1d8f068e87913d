//! Editor configuration: defaults, environment, optional JSON file, flags.
//!
//! Later layers win: built-in defaults < environment < config file < flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default source image, matching the editor's historical file name.
const DEFAULT_INPUT: &str = "Wallpaper-1.jpeg";
/// Default destination for edited images.
const DEFAULT_OUTPUT: &str = "EditedWallpaper-1.jpeg";
/// Default JPEG encoder quality.
const DEFAULT_JPEG_QUALITY: u8 = 90;
/// Default tracing filter directive.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime configuration for the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Image decoded at startup.
    pub input: PathBuf,
    /// Where transformed images are encoded. The format follows the extension.
    pub output: PathBuf,
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
    /// `tracing` filter directive used when `PIXELSMITH_LOG` is unset.
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            input: std::env::var_os("PIXELSMITH_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: std::env::var_os("PIXELSMITH_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values supplied on the command line. `None` keeps the lower layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub jpeg_quality: Option<u8>,
    pub log_level: Option<String>,
}

impl EditorConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then `file` if given, then `overrides`.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(quality) = overrides.jpeg_quality {
            self.jpeg_quality = quality;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Quality(self.jpeg_quality));
        }
        Ok(())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("JPEG quality must be between 1 and 100, got {0}")]
    Quality(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let base = EditorConfig {
            input: "in.png".into(),
            output: "out.png".into(),
            jpeg_quality: 80,
            log_level: "info".into(),
        };
        let merged = base.clone().with_overrides(ConfigOverrides {
            output: Some("edited.jpg".into()),
            jpeg_quality: Some(55),
            ..Default::default()
        });
        assert_eq!(merged.input, base.input);
        assert_eq!(merged.output, PathBuf::from("edited.jpg"));
        assert_eq!(merged.jpeg_quality, 55);
        assert_eq!(merged.log_level, "info");
    }

    #[test]
    fn test_quality_out_of_range_is_rejected() {
        let config = EditorConfig {
            jpeg_quality: 0,
            ..EditorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Quality(0))));
        assert!(
            EditorConfig::resolve(
                None,
                ConfigOverrides {
                    jpeg_quality: Some(101),
                    ..Default::default()
                }
            )
            .is_err()
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: EditorConfig = serde_json::from_str(r#"{"jpeg_quality": 70}"#).unwrap();
        assert_eq!(parsed.jpeg_quality, 70);
        assert_eq!(parsed.log_level, DEFAULT_LOG_LEVEL);
    }
}
