//! Configuration management for the personal assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::models::NoteSortKey;
use crate::repositories::DuplicatePolicy;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default contact auto-save store.
pub const DEFAULT_CONTACTS_STORE: &str = "auto_save.json";

/// Default note auto-save store.
pub const DEFAULT_NOTES_STORE: &str = "auto_save_notes.json";

/// Configuration for the personal assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory every store file name is resolved against (default: ".")
    pub data_dir: PathBuf,

    /// Contact store written after every mutating contact command
    pub contacts_store: String,

    /// Note store written after every mutating note command
    pub notes_store: String,

    /// What adding an existing contact name does (default: overwrite)
    pub duplicate_policy: DuplicatePolicy,

    /// Key used by the note `sort` command (default: tags)
    pub note_sort_key: NoteSortKey,

    /// Log filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_DATA_DIR`: directory for store files (default: ".")
    /// - `ASSISTANT_CONTACTS_STORE`: contact auto-save file (default: "auto_save.json")
    /// - `ASSISTANT_NOTES_STORE`: note auto-save file (default: "auto_save_notes.json")
    /// - `ASSISTANT_DUPLICATE_POLICY`: "overwrite" or "reject" (default: "overwrite")
    /// - `ASSISTANT_NOTE_SORT_KEY`: "tags" or "text" (default: "tags")
    /// - `LOG_LEVEL`: logging filter (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let data_dir = env::var("ASSISTANT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let contacts_store =
            Self::parse_store_name("ASSISTANT_CONTACTS_STORE", defaults.contacts_store)?;
        let notes_store = Self::parse_store_name("ASSISTANT_NOTES_STORE", defaults.notes_store)?;

        let duplicate_policy =
            Self::parse_env("ASSISTANT_DUPLICATE_POLICY", defaults.duplicate_policy)?;
        let note_sort_key = Self::parse_env("ASSISTANT_NOTE_SORT_KEY", defaults.note_sort_key)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_dir,
            contacts_store,
            notes_store,
            duplicate_policy,
            note_sort_key,
            log_level,
        })
    }

    /// Resolve a user-supplied store file name against the data directory.
    pub fn store_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name.trim())
    }

    /// Path of the contact auto-save store.
    pub fn contacts_store_path(&self) -> PathBuf {
        self.store_path(&self.contacts_store)
    }

    /// Path of the note auto-save store.
    pub fn notes_store_path(&self) -> PathBuf {
        self.store_path(&self.notes_store)
    }

    /// Parse an environment variable through `FromStr` with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Read a store file name, rejecting blank values.
    fn parse_store_name(var_name: &str, default: String) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val.trim().to_string()),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("."),
            contacts_store: DEFAULT_CONTACTS_STORE.to_string(),
            notes_store: DEFAULT_NOTES_STORE.to_string(),
            duplicate_policy: DuplicatePolicy::Overwrite,
            note_sort_key: NoteSortKey::Tags,
            log_level: "warn".to_string(),
        }
    }
}
