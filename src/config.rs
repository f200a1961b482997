//! User preferences read from `settings.toml` in the platform config directory.
//!
//! ```toml
//! view_mode = "masonry"
//! spacing = 8
//! orientation = "landscape"
//! show_delete = false
//! catalog_path = "/home/me/albumen.db"
//! ```
//!
//! Every key is optional. The file only provides starting values; view
//! changes made in the application are not written back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use albumen_core::layout::{DEFAULT_SPACING, ViewConfig, ViewMode, clamp_spacing};
use albumen_core::orientation::Orientation;

const CONFIG_FILE: &str = "settings.toml";
pub const APP_DIR: &str = "albumen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view_mode: ViewMode,
    pub spacing: u16,
    pub orientation: Orientation,
    pub show_delete: bool,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grid,
            spacing: DEFAULT_SPACING,
            orientation: Orientation::Portrait,
            show_delete: true,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            mode: self.view_mode,
            spacing: clamp_spacing(self.spacing),
            orientation: self.orientation,
            show_delete: self.show_delete,
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path.clone().unwrap_or_else(default_catalog_path)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn default_catalog_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("catalog.db")
}

pub fn thumbnail_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("thumbnails"))
}

/// Load preferences, falling back to defaults when the file is missing or
/// cannot be parsed.
pub fn load() -> Config {
    let Some(path) = default_config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => {
            info!(?path, "loaded settings");
            config
        }
        Err(err) => {
            warn!(?path, %err, "ignoring unreadable settings");
            Config::default()
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "view_mode = \"masonry\"\nspacing = 8\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.view_mode, ViewMode::Masonry);
        assert_eq!(config.spacing, 8);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert!(config.show_delete);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn unknown_view_mode_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "view_mode = \"carousel\"\n").unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn view_config_clamps_spacing() {
        let config = Config {
            spacing: 90,
            orientation: Orientation::Landscape,
            ..Config::default()
        };
        let view = config.view_config();
        assert_eq!(view.spacing, 40);
        assert_eq!(view.orientation, Orientation::Landscape);
    }

    #[test]
    fn explicit_catalog_path_wins() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/tmp/custom.db")),
            ..Config::default()
        };
        assert_eq!(config.catalog_path(), PathBuf::from("/tmp/custom.db"));
        assert!(Config::default().catalog_path().ends_with("albumen/catalog.db"));
    }
}
