// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use crate::chooser::ChoosePolicy;
use crate::error::Error;
use crate::window::ReadingWindow;

/// The name of the application.
pub const APP_NAME: &str = "shelf";

/// Configuration for the planning tools.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// First reading hour used when a schedule does not name one.
    pub default_start_hour: i8,

    /// Last reading hour used when a schedule does not name one.
    pub default_end_hour: i8,

    /// Policy used to pick a book when none is given.
    pub default_policy: ChoosePolicy,

    /// Maximum number of checkpoints to display.
    pub schedule_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_start_hour: ReadingWindow::DEFAULT_START_HOUR,
            default_end_hour: ReadingWindow::DEFAULT_END_HOUR,
            default_policy: ChoosePolicy::default(),
            schedule_limit: 20,
        }
    }
}

impl Config {
    /// The reading window to use, overriding the configured hours with the given ones.
    pub fn reading_window(
        &self,
        start_hour: Option<i8>,
        end_hour: Option<i8>,
    ) -> Result<ReadingWindow, Error> {
        ReadingWindow::new(
            start_hour.unwrap_or(self.default_start_hour),
            end_hour.unwrap_or(self.default_end_hour),
        )
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn StdError>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn StdError>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn StdError>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
