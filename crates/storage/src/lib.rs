#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod config;
mod document;
mod json_file;

pub use config::{ConfigError, load_config, load_config_or_default, parse_config};
pub use document::{Document, LogEntry, NewOneRepMax};
pub use json_file::{JsonFile, JsonFileError};
