use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use simplelog::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Validate a form snapshot against declarative field rules."
)]
pub(crate) struct Args {
    /// JSON file with the list of field rules
    pub rules: PathBuf,

    /// JSON file with the form snapshot (field values and option lists)
    pub snapshot: PathBuf,

    /// Translation catalog: a JSON object mapping message templates to translations
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output log level [default: from settings, else info]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Also log to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}
