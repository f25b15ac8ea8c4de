//! User configuration.
//!
//! Settings live in `config.json` inside the per-user data directory. A missing
//! file yields [`Config::default`], so the application runs without any setup.
//!
//! ```rust,no_run
//! use kolecko::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.label_format = "%d/%m".to_string();
//! config.save()?;
//! # Ok::<(), kolecko::libs::error::AppError>(())
//! ```

use super::data_storage::DataStorage;
use super::day_counter::{format_label, DEFAULT_LABEL_FORMAT};
use super::error::{AppError, AppResult};
use super::task::TaskDefaults;
use crate::libs::messages::Message;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// strftime pattern for the chart label stored with each day.
    #[serde(default = "default_label_format")]
    pub label_format: String,

    /// Defaults for the optional task attributes.
    #[serde(default)]
    pub tasks: TaskDefaults,

    /// Store file name inside the data directory, `kolecko.db` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_file: Option<String>,
}

fn default_label_format() -> String {
    DEFAULT_LABEL_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            label_format: default_label_format(),
            tasks: TaskDefaults::default(),
            db_file: None,
        }
    }
}

impl Config {
    pub fn path() -> AppResult<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read() -> AppResult<Config> {
        Self::read_from(Self::path()?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> AppResult<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(Self::path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> AppResult<()> {
        self.validate()?;
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|e| AppError::Config(e.to_string()))?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> AppResult<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_label_format(&self.label_format).map_err(AppError::Config)
    }

    /// Interactive wizard, starting from the current configuration.
    pub fn init() -> AppResult<Self> {
        let current = Self::read()?;
        let theme = ColorfulTheme::default();

        let label_format: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptLabelFormat.to_string())
            .default(current.label_format.clone())
            .validate_with(|input: &String| validate_label_format(input))
            .interact_text()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let priority: i32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .default(current.tasks.priority)
            .interact_text()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Config {
            label_format,
            tasks: TaskDefaults {
                priority,
                icon: current.tasks.icon,
            },
            db_file: current.db_file,
        })
    }
}

fn validate_label_format(format: &str) -> Result<(), String> {
    if format.trim().is_empty() {
        return Err(Message::LabelFormatEmpty.to_string());
    }
    // Rendering a sample date catches both malformed patterns and time fields.
    if format_label(NaiveDate::default(), format).is_err() {
        return Err(Message::LabelFormatInvalid(format.to_string()).to_string());
    }
    Ok(())
}
