//! Configuration for hexfolio.
//!
//! Settings live in `config.toml` under the platform config directory.
//! Every section and field has a default, so a partial file is valid and
//! a missing file means "use the defaults".

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};
use directories::ProjectDirs;
use hexfolio_core::{AppearanceSettings, EffectSettings, GlitchSettings, Portfolio};
use serde::{Deserialize, Serialize};

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Project directories for hexfolio, if a home directory can be found.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "hexfolio", "hexfolio")
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceSettings,
    pub effects: EffectSettings,
    pub glitch: GlitchSettings,
    /// Page content.
    pub content: Portfolio,
}

impl Config {
    /// Default location of the config file.
    pub fn path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the config from its default location.
    ///
    /// A missing file yields the defaults. An unreadable or invalid file is
    /// logged and also yields the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("no config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::error!("{err:#}, using defaults");
                Self::default()
            }
        }
    }

    /// Load the config from `path`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).wrap_err_with(|| format!("invalid config in {}", path.display()))
    }

    /// Parse a TOML document; effect values the animations cannot use are
    /// replaced.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        config.effects = config.effects.sanitized();
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).wrap_err_with(|| format!("failed to write {}", path.display()))
    }
}
