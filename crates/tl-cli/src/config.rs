//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Threshold used when neither config nor flags set one.
pub const DEFAULT_THRESHOLD_KM: f64 = 100.0;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Days with more vehicle travel than this (in km) are reported.
    pub threshold_km: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_km: DEFAULT_THRESHOLD_KM,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Later sources override earlier ones: defaults, the user config file,
    /// `config_path`, then `TL_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let user_config = dirs_config_path().map(|dir| dir.join("config.toml"));
        Self::figment(user_config.as_deref(), config_path).extract()
    }

    fn figment(user_config: Option<&Path>, config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = user_config {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("TL_"))
    }
}

/// Returns the platform-specific config directory for tl.
///
/// On Linux: `~/.config/tl`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tl"))
}
