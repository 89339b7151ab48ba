use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const APP_NAME: &str = "rpetcare";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_priority")]
    pub default_priority: String,
    #[serde(default = "default_time")]
    pub default_time: String,
    #[serde(default = "default_category")]
    pub default_category: String,
    /// First column of the `calendar` grid: "Mon" or "Sun".
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_show_completed")]
    pub show_completed: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

pub(crate) fn default_priority() -> String {
    "medium".to_string()
}
pub(crate) fn default_time() -> String {
    "09:00".to_string()
}
pub(crate) fn default_category() -> String {
    "feeding".to_string()
}
pub(crate) fn default_week_start() -> String {
    "Mon".to_string()
}
pub(crate) fn default_show_completed() -> bool {
    true
}
pub(crate) fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db: PathBuf) -> Self {
        Self {
            database: db.to_string_lossy().to_string(),
            default_priority: default_priority(),
            default_time: default_time(),
            default_category: default_category(),
            week_start: default_week_start(),
            show_completed: default_show_completed(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join(APP_NAME)
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(format!(".{APP_NAME}"))
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(format!("{APP_NAME}.conf"))
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(format!("{APP_NAME}.sqlite"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Week start for the calendar grid. Anything but Sunday means Monday.
    pub fn week_start_day(&self) -> Weekday {
        match self.week_start.trim().to_ascii_lowercase().as_str() {
            "sun" | "sunday" => Weekday::Sun,
            _ => Weekday::Mon,
        }
    }

    /// Validate every field that has a fixed vocabulary.
    pub fn validate(&self) -> AppResult<()> {
        use crate::models::{category::Category, priority::Priority};
        use crate::utils::time::parse_time_strict;

        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        Priority::from_code(&self.default_priority)
            .ok_or_else(|| AppError::InvalidPriority(self.default_priority.clone()))?;
        parse_time_strict(&self.default_time)?;
        Category::new(&self.default_category)?;

        match self.week_start.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" | "sun" | "sunday" => {}
            other => {
                return Err(AppError::Config(format!(
                    "week_start must be Mon or Sun, got '{other}'"
                )));
            }
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(
                "separator_char must be a single character".into(),
            ));
        }
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        // Test runs never touch the user's config file.
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        success(format!("Database:    {}", db_path.display()));

        Ok(config)
    }
}
