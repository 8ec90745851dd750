//! Global meetbook configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{MeetbookError, MeetbookResult};

static DEFAULT_DATA_FILE: &str = "~/.meetbook/addressbook.json";
static DEFAULT_REMINDER_WINDOW: &str = "1day";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn is_default_data_file(p: &PathBuf) -> bool {
    *p == default_data_file()
}

fn default_reminder_window() -> String {
    DEFAULT_REMINDER_WINDOW.to_string()
}

fn is_default_reminder_window(s: &String) -> bool {
    s == DEFAULT_REMINDER_WINDOW
}

/// Configuration at ~/.config/meetbook/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MeetbookConfig {
    #[serde(default = "default_data_file", skip_serializing_if = "is_default_data_file")]
    pub data_file: PathBuf,

    /// How far ahead `reminders` looks, e.g. "1day" or "3h".
    #[serde(
        default = "default_reminder_window",
        skip_serializing_if = "is_default_reminder_window"
    )]
    pub reminder_window: String,
}

impl Default for MeetbookConfig {
    fn default() -> Self {
        MeetbookConfig {
            data_file: default_data_file(),
            reminder_window: default_reminder_window(),
        }
    }
}

impl MeetbookConfig {
    pub fn config_path() -> MeetbookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MeetbookError::Config("Could not determine config directory".into()))?
            .join("meetbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out config file
    /// there first if none exists.
    pub fn load() -> MeetbookResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::create_default_config(&path)?;
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> MeetbookResult<Self> {
        let config: MeetbookConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| MeetbookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MeetbookError::Config(e.to_string()))?;

        config.reminder_window()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> MeetbookResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| MeetbookError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| MeetbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn reminder_window(&self) -> MeetbookResult<Duration> {
        humantime::parse_duration(&self.reminder_window).map_err(|e| {
            MeetbookError::Config(format!(
                "Invalid reminder_window '{}': {e}",
                self.reminder_window
            ))
        })
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> MeetbookResult<()> {
        let contents = format!(
            "\
# meetbook configuration

# Where your contacts and meetings are stored:
# data_file = \"{}\"

# How far ahead `reminders` looks:
# reminder_window = \"{}\"
",
            DEFAULT_DATA_FILE, DEFAULT_REMINDER_WINDOW
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MeetbookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| MeetbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
