//! User settings, read from `settings.json` in the config directory.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::args::{Args, LogLevel};
use crate::error::CliError;

/// Settings file contents. Every key is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub log_level: Option<LogLevel>,
    /// Catalog used when `--catalog` is not given.
    pub catalog: Option<PathBuf>,
}

/// Effective configuration after command-line overrides.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub log_level: LogLevel,
    pub catalog: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        match read_to_string(path).map_err(|e| CliError::io(path, e))? {
            Some(contents) => serde_json::from_str(&contents).map_err(|e| CliError::json(path, e)),
            None => Ok(Self::default()),
        }
    }

    /// Command-line flags win over settings.
    pub fn resolve(self, args: &Args) -> Config {
        Config {
            log_level: args.log_level.or(self.log_level).unwrap_or(LogLevel::Info),
            catalog: args.catalog.clone().or(self.catalog),
        }
    }
}

fn read_to_string(path: &Path) -> io::Result<Option<String>> {
    std::fs::read_to_string(path)
        .map(Some)
        .or_else(|e| match e.kind() {
            io::ErrorKind::NotFound => Ok(None),
            _ => Err(e),
        })
}
