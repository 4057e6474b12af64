//! Command-line argument definitions using clap

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::ConfigError;
use crate::pipeline::{normalize_extension, MatchRule, DEFAULT_EXTENSION};
use crate::utils::{LogSettings, DEFAULT_BACKUPS, DEFAULT_LOG_FILE, DEFAULT_MAX_BYTES};

/// tocrename - Rename video files after the entries of a numbered table of contents
#[derive(Parser, Debug)]
#[command(name = "tocrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pattern matching the files to rename. Must contain a wildcard.
    /// Glob form: `lesson*.mp4`, the first `*` is the index.
    /// Regex form: `lesson(\d+)\.mp4`, capture group 1 is the index.
    /// Literal parentheses need the glob form: `Video (*).mp4`.
    #[arg(short, long)]
    pub pattern: String,

    /// Text file with one `<number> - <name>` entry per line
    #[arg(short, long)]
    pub file: PathBuf,

    /// Enable debug output in the console and the log file
    #[arg(short, long, default_value = "false")]
    pub debug: bool,

    /// Directory holding the files to rename
    #[arg(short = 'C', long, default_value = ".")]
    pub directory: PathBuf,

    /// Extension of the files to rename (case-insensitive, dot optional)
    #[arg(short, long, default_value = DEFAULT_EXTENSION, value_parser = validate_extension)]
    pub extension: String,

    /// Log file path. Rotated once it grows past --log-max-bytes.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Size in bytes at which the log file is rotated (0 disables rotation)
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    pub log_max_bytes: u64,

    /// Skip the interactive confirmation prompt
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Show what would be renamed without renaming anything
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}

impl Cli {
    /// Logging configuration derived from the flags
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: if self.debug {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            console: true,
            file: Some(self.log_file.clone()),
            max_bytes: self.log_max_bytes,
            backups: DEFAULT_BACKUPS,
        }
    }

    /// Validate the arguments that clap cannot check on its own.
    ///
    /// Compiles the pattern and checks that the numbering file and the
    /// working directory exist. Nothing is read or written yet.
    pub fn to_run_config(&self) -> Result<RunConfig, ConfigError> {
        let rule = MatchRule::from_pattern(&self.pattern)?;

        if !self.file.is_file() {
            return Err(ConfigError::FileNotFound(self.file.clone()));
        }
        if !self.directory.is_dir() {
            return Err(ConfigError::DirectoryNotFound(self.directory.clone()));
        }

        Ok(RunConfig {
            rule,
            numbering_file: self.file.clone(),
            directory: self.directory.clone(),
            extension: self.extension.clone(),
            dry_run: self.dry_run,
            no_confirm: self.no_confirm,
            log: self.log_settings(),
        })
    }
}

/// Validator for the extension parameter
fn validate_extension(s: &str) -> Result<String, String> {
    let extension = normalize_extension(s);

    if extension.is_empty() {
        Err(format!("'{}' is not a valid extension", s))
    } else if extension.contains(['/', '\\', '.']) {
        Err(format!(
            "extension must be a single component like 'mp4', got '{}'",
            s
        ))
    } else {
        Ok(extension)
    }
}
