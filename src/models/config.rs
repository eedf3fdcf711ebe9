use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ArtError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "BIN2ART_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// File extensions (without dot) picked up when scanning a directory
    pub included_extensions: Vec<String>,

    /// Side length of the saved image in pixels
    pub output_size: u32,

    /// Palette size for the posterize effect
    pub poster_colors: usize,

    /// Gaussian blur sigma
    pub blur_radius: f32,

    /// Saturation factor (1.0 = unchanged)
    pub color_enhance: f32,

    /// Contrast factor (1.0 = unchanged)
    pub contrast_enhance: f32,

    /// Recompress PNG output with oxipng
    pub optimize_png: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            included_extensions: ["dsk", "tap", "a26", "cdt", "rom", "mp3"]
                .into_iter()
                .map(String::from)
                .collect(),
            output_size: 1920,
            poster_colors: 8,
            blur_radius: 2.0,
            color_enhance: 1.5,
            contrast_enhance: 1.3,
            optimize_png: false,
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line
    Argument(PathBuf),
    /// The `BIN2ART_CONFIG` environment variable
    Environment(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl ConfigSource {
    /// Pick the config path: explicit argument first, then the environment.
    pub fn resolve(argument: Option<PathBuf>) -> Self {
        if let Some(path) = argument {
            return ConfigSource::Argument(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => ConfigSource::Environment(PathBuf::from(value)),
            _ => ConfigSource::Defaults,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Argument(path) | ConfigSource::Environment(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Argument(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Environment(path) => {
                write!(f, "{} ({CONFIG_ENV_VAR})", path.display())
            }
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text. Missing fields take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ArtError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from `source`, falling back to defaults when the
    /// file cannot be read or parsed
    pub fn load(source: &ConfigSource) -> Self {
        let Some(path) = source.path() else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        extensions = config.included_extensions.len(),
                        output_size = config.output_size,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %path.display(),
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Whether `path` ends with one of the included extensions (case-insensitive)
    pub fn includes(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.included_extensions
            .iter()
            .any(|included| included.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
