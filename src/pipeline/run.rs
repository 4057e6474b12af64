//! Single entry point that runs the whole rename pipeline

use super::numbering::{load_numbering, NumberingTable};
use super::renamer::{execute_plan, plan_renames, FileOutcome};
use super::selector::select_candidates;
use crate::cli::ConfirmationGate;
use crate::config::RunConfig;
use crate::error::{RenameError, Result};
use crate::utils::RunLog;

/// Confirm, load the numbering table, select candidates, plan and rename.
///
/// Returns one outcome per candidate file. Declining the prompt or finding
/// no candidates ends the run with an error value and no mutation; an empty
/// numbering table only produces a warning.
pub fn run_pipeline(
    config: &RunConfig,
    gate: &mut dyn ConfirmationGate,
    log: &RunLog,
) -> Result<Vec<FileOutcome>> {
    log.debug(format!(
        "Pattern '{}' used as {} '{}'",
        config.rule.as_str(),
        config.rule.kind(),
        config.rule.regex().as_str()
    ));

    let confirmed = gate
        .confirm(&config.confirmation_message())
        .map_err(|e| RenameError::io("Failed to read confirmation", e))?;
    if !confirmed {
        return Err(RenameError::UserAborted);
    }

    let table = match load_numbering(&config.numbering_file, log) {
        Ok(table) => table,
        Err(RenameError::EmptyMapping { path }) => {
            log.warn(format!(
                "No valid entries found in '{}', no file can be renamed",
                path.display()
            ));
            NumberingTable::new()
        }
        Err(e) => return Err(e),
    };

    let candidates = select_candidates(&config.directory, &config.extension, log)?;
    let plan = plan_renames(&candidates, &config.rule, &table, log);

    Ok(execute_plan(plan, &config.directory, config.dry_run, log))
}
