//! Configuration module for ods2sql.
//!
//! Handles the TOML settings file and its resolution into [`ConvertOptions`].

mod options;
mod settings;

pub use options::{
    parse_column_list, parse_composite, ConvertOptions, OutputMode, DEFAULT_BATCH_SIZE,
};
pub use settings::{IndexSettings, Settings, SettingsError, CONFIG_FILE_NAME};
