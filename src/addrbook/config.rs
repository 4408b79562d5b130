use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "address_book.json";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_UPCOMING_DAYS: i64 = 7;
const DEFAULT_LOG_LEVEL: &str = "info";

pub const KEYS: [&str; 4] = ["data-file", "page-size", "upcoming-days", "log-level"];

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Book file name, relative to the data dir unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Records per page in `list`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Look-ahead window for `when` without an explicit day count
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_upcoming_days() -> i64 {
    DEFAULT_UPCOMING_DAYS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            log_level: default_log_level(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| BookError::CorruptFormat(format!("{}: {e}", config_path.display())))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(|e| BookError::Io(e.into()))?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    /// Where the book lives for this data dir.
    pub fn book_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "page-size" => Ok(self.page_size.to_string()),
            "upcoming-days" => Ok(self.upcoming_days.to_string()),
            "log-level" => Ok(self.log_level.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets one key; an invalid value leaves the config unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "data-file" => {
                if value.is_empty() {
                    return Err(BookError::EmptyArgument("data-file"));
                }
                self.data_file = value.to_string();
            }
            "page-size" => self.page_size = parse_positive(key, value)?,
            "upcoming-days" => {
                self.upcoming_days = value
                    .parse::<i64>()
                    .ok()
                    .filter(|days| *days >= 0)
                    .ok_or_else(|| invalid(key, value))?;
            }
            "log-level" => {
                let level = value.to_ascii_lowercase();
                if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
                    return Err(invalid(key, value));
                }
                self.log_level = level;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> BookError {
    BookError::InvalidFieldValue(format!("`{value}` is not a valid {key}"))
}

fn unknown_key(key: &str) -> BookError {
    BookError::InvalidFieldValue(format!(
        "unknown config key `{key}` (expected one of: {})",
        KEYS.join(", ")
    ))
}
