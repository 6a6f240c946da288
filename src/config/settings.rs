//! TOML-based configuration for ods2sql.
//!
//! Every command-line option has a file counterpart, so a project can keep its
//! conversion settings next to the spreadsheet. Command-line flags override
//! file values.
//!
//! Example configuration:
//! ```toml
//! dialect = "postgres"
//! batch = 1000
//! transaction = true
//! if_not_exists = true
//! drop = false
//! tables = ["people", "orders"]
//! primary_key = ["id"]
//!
//! [indexes]
//! enabled = true
//! columns = ["email", "created_at"]
//! composite = ["last_name+first_name"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::options::{
    parse_column_list, parse_composite, ConvertOptions, OutputMode, DEFAULT_BATCH_SIZE,
};
use crate::sql::{Dialect, UnknownDialect};

/// Local config file name.
pub const CONFIG_FILE_NAME: &str = "ods2sql.toml";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error(transparent)]
    UnknownDialect(#[from] UnknownDialect),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Target dialect: sqlite, postgres (postgresql), mysql.
    pub dialect: String,

    /// Rows per INSERT statement (0/1 for one row per INSERT).
    pub batch: usize,

    /// Wrap output in a single transaction (SQLite/Postgres).
    pub transaction: bool,

    /// Use IF NOT EXISTS in CREATE TABLE/INDEX where supported.
    pub if_not_exists: bool,

    /// Emit DROP TABLE IF EXISTS before each CREATE TABLE.
    pub drop: bool,

    /// Emit only DDL.
    pub schema_only: bool,

    /// Emit only INSERT statements.
    pub data_only: bool,

    /// Only export these tables (empty = all).
    pub tables: Vec<String>,

    /// PRIMARY KEY column(s) applied to every exported table.
    pub primary_key: Vec<String>,

    /// Index settings.
    pub indexes: IndexSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dialect: Dialect::default().name().to_string(),
            batch: DEFAULT_BATCH_SIZE,
            transaction: false,
            if_not_exists: false,
            drop: true,
            schema_only: false,
            data_only: false,
            tables: Vec::new(),
            primary_key: Vec::new(),
            indexes: IndexSettings::default(),
        }
    }
}

/// Index settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Create indexes at all.
    pub enabled: bool,

    /// Restrict per-column indexes to these columns (empty = every non-PK column).
    pub columns: Vec<String>,

    /// Composite indexes, columns joined by `+` (e.g. `"a+b"`).
    pub composite: Vec<String>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            columns: Vec::new(),
            composite: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Otherwise searches in order:
    /// 1. `./ods2sql.toml`
    /// 2. `<config dir>/ods2sql/config.toml`
    ///
    /// and falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ods2sql").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Validate and convert into conversion options.
    pub fn to_options(&self) -> Result<ConvertOptions, SettingsError> {
        let dialect: Dialect = self.dialect.parse()?;

        let mode = match (self.schema_only, self.data_only) {
            (true, true) => {
                return Err(SettingsError::InvalidConfig(
                    "schema_only and data_only are mutually exclusive".to_string(),
                ))
            }
            (true, false) => OutputMode::SchemaOnly,
            (false, true) => OutputMode::DataOnly,
            (false, false) => OutputMode::Full,
        };

        Ok(ConvertOptions {
            dialect,
            batch_size: self.batch,
            wrap_transaction: self.transaction,
            if_not_exists: self.if_not_exists,
            emit_drop: self.drop,
            mode,
            table_filter: self.tables.iter().map(|t| t.trim().to_string()).collect(),
            default_indices: self.indexes.enabled,
            index_columns: parse_column_list(self.indexes.columns.iter().map(String::as_str)),
            composite_indexes: self
                .indexes
                .composite
                .iter()
                .map(|spec| parse_composite(spec))
                .filter(|cols| !cols.is_empty())
                .collect(),
            primary_key: parse_column_list(self.primary_key.iter().map(String::as_str)),
        })
    }
}
