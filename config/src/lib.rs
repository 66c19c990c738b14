//! Configuration for the landing page terminal front end.
//!
//! Read from `~/.landing/config.toml`. Every key is optional; a missing file
//! means defaults.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use landing_types::ui::UiOptions;

const DEFAULT_SCROLL_DURATION_MS: u64 = 600;
const DEFAULT_PAGE_OVERLAP: u16 = 2;
const REDUCED_MOTION_ENV: &str = "LANDING_REDUCED_MOTION";

const fn default_scroll_duration_ms() -> u64 {
    DEFAULT_SCROLL_DURATION_MS
}

const fn default_page_overlap() -> u16 {
    DEFAULT_PAGE_OVERLAP
}

#[derive(Debug, Default, Deserialize)]
pub struct LandingConfig {
    pub app: Option<AppConfig>,
    pub scroll: Option<ScrollConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for borders and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable modal transitions and smooth scrolling.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScrollConfig {
    /// Length of an animated scroll to an anchor.
    #[serde(default = "default_scroll_duration_ms")]
    pub duration_ms: u64,
    /// Lines kept visible from the previous page on PageUp/PageDown.
    #[serde(default = "default_page_overlap")]
    pub page_overlap: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_SCROLL_DURATION_MS,
            page_overlap: DEFAULT_PAGE_OVERLAP,
        }
    }
}

impl ScrollConfig {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl LandingConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load a specific file. `Ok(None)` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from `[app]`, with the reduced-motion environment override.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let mut options = self
            .app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default();
        if let Some(reduced) = reduced_motion_from_env() {
            options.reduced_motion = reduced;
        }
        options
    }

    #[must_use]
    pub fn scroll(&self) -> ScrollConfig {
        self.scroll.unwrap_or_default()
    }
}

fn reduced_motion_from_env() -> Option<bool> {
    parse_flag(&env::var(REDUCED_MOTION_ENV).ok()?)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring unrecognized {REDUCED_MOTION_ENV} value: {other}");
            None
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".landing").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_empty_config() {
        let config: LandingConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.scroll.is_none());
        assert_eq!(config.scroll(), ScrollConfig::default());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r"
[app]
ascii_only = true
reduced_motion = true
";
        let config: LandingConfig = toml::from_str(toml_str).unwrap();
        let app = config.app.unwrap();
        assert!(app.ascii_only);
        assert!(!app.high_contrast);
        assert!(app.reduced_motion);
    }

    #[test]
    fn parse_partial_scroll_config_fills_defaults() {
        let config: LandingConfig = toml::from_str("[scroll]\nduration_ms = 250\n").unwrap();
        let scroll = config.scroll();
        assert_eq!(scroll.duration(), Duration::from_millis(250));
        assert_eq!(scroll.page_overlap, DEFAULT_PAGE_OVERLAP);
    }

    #[test]
    fn parse_flag_values() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = LandingConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app]\nhigh_contrast = true\n").unwrap();

        let config = LandingConfig::load_from(&path).unwrap().unwrap();
        assert!(config.app.unwrap().high_contrast);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app\nascii_only = ").unwrap();

        let err = LandingConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("failed to parse config"));
    }
}
