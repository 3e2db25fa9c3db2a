mod args;
mod error;
mod output;
mod paths;
mod settings;

use std::fs::{self, File};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use formcheck_lib::locale::Catalog;
use formcheck_lib::sink::RecordingSink;
use formcheck_lib::snapshot::Snapshot;
use formcheck_lib::validation::{FieldRule, Inputs, ValidationContext};
use log::{debug, info};
use serde::de::DeserializeOwned;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::args::Args;
use crate::error::CliError;
use crate::settings::Settings;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs one validation pass. Returns whether every field passed.
fn run(args: Args) -> Result<bool, CliError> {
    let settings = match paths::settings_file() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let config = settings.resolve(&args);

    init_logging(config.log_level.into(), args.verbose)?;
    info!(
        "validating {} against {}",
        args.snapshot.display(),
        args.rules.display()
    );

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::new(),
    };
    debug!("loaded {} translations", catalog.len());

    let rules: Vec<FieldRule> = read_json(&args.rules)?;
    let snapshot: Snapshot = read_json(&args.snapshot)?;

    let mut sink = RecordingSink::new();
    let inputs = Inputs::new(&snapshot, &snapshot).with_locale(&catalog);
    let report = ValidationContext::new(inputs, &mut sink).validate_fields(&rules);

    for alert in sink.alerts() {
        eprintln!("alert: {}", alert);
    }

    if args.json {
        let json = output::render_json(&report).map_err(|e| CliError::json(&args.rules, e))?;
        println!("{}", json);
    } else {
        println!("{}", output::render_text(&report));
    }

    info!(
        "{} of {} fields failed",
        report.failed().count(),
        report.results().len()
    );
    Ok(report.all_passed())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CliError::json(path, e))
}

/// Logs to `latest.log` in the cache directory, and to stderr if `verbose`.
fn init_logging(level: LevelFilter, verbose: bool) -> Result<(), CliError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if let Some(path) = paths::log_file() {
        paths::rotate_logs();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))?;
        }
        let file = File::create(&path).map_err(|e| CliError::io(&path, e))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    if verbose {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    if !loggers.is_empty() {
        CombinedLogger::init(loggers)?;
    }
    Ok(())
}
