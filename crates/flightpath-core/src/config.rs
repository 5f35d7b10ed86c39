//! Configuration for flightpath (stored in ~/.config/flightpath/config.toml)
//!
//! Every field is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, RouteError};

const CONFIG_DIR: &str = "flightpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "FLIGHTPATH_CONFIG_DIR";

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    /// Dataset loaded when `--data` is not given. Relative paths resolve
    /// against the directory holding the config file.
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Attribute name carrying the edge weight in dataset lines
    #[serde(default = "default_weight_label")]
    pub weight_label: String,

    /// Insert each `A -- B` connection in both directions
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_weight_label() -> String {
    "miles".to_string()
}

fn default_bidirectional() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            weight_label: default_weight_label(),
            bidirectional: default_bidirectional(),
        }
    }
}

impl RouterConfig {
    /// Default location: `$FLIGHTPATH_CONFIG_DIR/config.toml`, else the
    /// platform config directory
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RouteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// default location if present, otherwise defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read config", path.display(), e))?;
        let mut config: RouterConfig = toml::from_str(&content)?;

        if config.weight_label.is_empty()
            || !config
                .weight_label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(RouteError::invalid_value(
                "weight_label",
                &config.weight_label,
            ));
        }

        if let (Some(dataset), Some(base)) = (&config.dataset, path.parent()) {
            if dataset.is_relative() {
                config.dataset = Some(base.join(dataset));
            }
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
