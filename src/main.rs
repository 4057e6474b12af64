//! tocrename: Table of Contents Renamer CLI Tool
//!
//! Renames video files in a directory after the numbered entries of a
//! text file, asking for confirmation first.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::Log;

use tocrename::cli::{AutoConfirm, Cli, ConfirmationGate, TerminalPrompt};
use tocrename::pipeline::run_pipeline;
use tocrename::report::RenameSummary;
use tocrename::utils::{print_banner, print_completion, print_config, print_warning, RunLog};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log = RunLog::open(&cli.log_settings())
        .with_context(|| format!("Failed to open log file: {}", cli.log_file.display()))?;
    if cli.debug {
        log.debug("Debug mode enabled");
    }

    // Arguments are validated before anything is asked or touched
    let config = match cli.to_run_config() {
        Ok(config) => config,
        Err(err) => {
            log.error(format!("{}. Exiting...", err));
            log.flush();
            return Ok(ExitCode::FAILURE);
        }
    };

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let mut gate: Box<dyn ConfirmationGate> = if config.no_confirm {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalPrompt)
    };

    let code = match run_pipeline(&config, gate.as_mut(), &log) {
        Ok(outcomes) => {
            let summary = RenameSummary::from_outcomes(&outcomes);
            summary.display();

            if summary.has_failures() {
                print_warning("Some files could not be renamed, see the log for details");
                ExitCode::FAILURE
            } else {
                print_completion(config.dry_run);
                ExitCode::SUCCESS
            }
        }
        Err(err) if err.is_clean_exit() => {
            log.info(format!("{}. Exiting...", err));
            ExitCode::SUCCESS
        }
        Err(err) => {
            log.error(format!("{}. Exiting...", err));
            ExitCode::FAILURE
        }
    };

    log.flush();
    Ok(code)
}
