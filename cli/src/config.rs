// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use shelf_core::{APP_NAME, Config as CoreConfig, expand_path, get_config_dir};

const SHELF_CONFIG_ENV: &str = "SHELF_CONFIG";

/// Loads the configuration.
///
/// Lookup order: the `--config` flag, the `SHELF_CONFIG` environment
/// variable, then `shelf/config.toml` in the user config directory. Only the
/// last one may be missing, in which case the defaults are used.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        expand_path(&path)?
    } else if let Ok(env_path) = std::env::var(SHELF_CONFIG_ENV) {
        expand_path(&PathBuf::from(env_path))?
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
