use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::file_utils::DEFAULT_OUTPUT_SUFFIX;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Swap which language is assigned to `title` and `title_alt`
    #[serde(default)]
    pub lang_alt_reverse: bool,

    /// Suffix replacing `.xml` when the output path is derived from the input
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}

impl Config {
    /// Load a configuration file (JSON)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_suffix.is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }

        if !self.output_suffix.to_ascii_lowercase().ends_with(".xml") {
            return Err(anyhow!(
                "Output suffix must end with '.xml', got '{}'",
                self.output_suffix
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            lang_alt_reverse: false,
            output_suffix: default_output_suffix(),
        }
    }
}
