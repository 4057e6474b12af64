//! Index extraction, collision checks and the renames themselves

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use same_file::is_same_file;

use super::numbering::NumberingTable;
use super::pattern::MatchRule;
use super::selector::CandidateFile;
use crate::utils::RunLog;

/// Why a candidate was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The match rule did not yield an index
    NoPatternMatch,
    /// The index is not in the numbering table
    IndexUnmapped(u32),
    /// Another candidate would get the same name
    DuplicateTarget(String),
    /// A file with the new name is already on disk
    TargetExists(String),
    /// The file already has its new name
    AlreadyNamed,
    /// The label would put a path separator in the new name
    UnsafeName(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoPatternMatch => write!(f, "no match found"),
            SkipReason::IndexUnmapped(index) => {
                write!(f, "index {} not found in numbering file", index)
            }
            SkipReason::DuplicateTarget(target) => {
                write!(f, "'{}' is the target of more than one file", target)
            }
            SkipReason::TargetExists(target) => write!(f, "'{}' already exists", target),
            SkipReason::AlreadyNamed => write!(f, "already has its new name"),
            SkipReason::UnsafeName(target) => {
                write!(f, "'{}' is not a plain file name", target)
            }
        }
    }
}

/// A rename that passed every check during planning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub source: String,
    pub target: String,
    pub index: u32,
}

/// One entry of the rename plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Rename(PlannedRename),
    Skip { file: String, reason: SkipReason },
}

/// Terminal state of a candidate after execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Renamed { from: String, to: String },
    /// Dry run: the rename was planned but not performed
    WouldRename { from: String, to: String },
    Skipped { file: String, reason: SkipReason },
    /// The filesystem refused the rename
    Failed {
        file: String,
        target: String,
        error: String,
    },
}

/// New file name for an index: zero-padded to three digits, a dash, the
/// label and the original extension
pub fn target_name(index: u32, label: &str, extension: &str) -> String {
    format!("{:03}-{}.{}", index, label, extension)
}

fn is_plain_name(name: &str) -> bool {
    !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Work out what should happen to every candidate, without touching the
/// filesystem.
///
/// Destination names are compared case-insensitively; all candidates that
/// share a destination are skipped.
pub fn plan_renames(
    candidates: &[CandidateFile],
    rule: &MatchRule,
    table: &NumberingTable,
    log: &RunLog,
) -> Vec<PlanStep> {
    let proposed: Vec<Result<PlannedRename, SkipReason>> = candidates
        .iter()
        .map(|candidate| -> Result<PlannedRename, SkipReason> {
            let index = rule
                .extract_index(&candidate.name)
                .ok_or(SkipReason::NoPatternMatch)?;
            let label = table.get(index).ok_or(SkipReason::IndexUnmapped(index))?;
            log.debug(format!(
                "Found file '{}' with number '{}'",
                candidate.name, index
            ));
            Ok(PlannedRename {
                source: candidate.name.clone(),
                target: target_name(index, label, &candidate.extension),
                index,
            })
        })
        .collect();

    let mut target_counts: HashMap<String, usize> = HashMap::new();
    for planned in proposed.iter().flatten() {
        *target_counts
            .entry(planned.target.to_lowercase())
            .or_insert(0) += 1;
    }

    candidates
        .iter()
        .zip(proposed)
        .map(|(candidate, proposal)| {
            let reason = match proposal {
                Err(reason) => reason,
                Ok(planned) if !is_plain_name(&planned.target) => {
                    SkipReason::UnsafeName(planned.target)
                }
                Ok(planned) if target_counts[&planned.target.to_lowercase()] > 1 => {
                    SkipReason::DuplicateTarget(planned.target)
                }
                Ok(planned) if planned.target == planned.source => SkipReason::AlreadyNamed,
                Ok(planned) => return PlanStep::Rename(planned),
            };
            PlanStep::Skip {
                file: candidate.name.clone(),
                reason,
            }
        })
        .collect()
}

/// Carry out a plan inside `directory`.
///
/// Existing destinations are checked right before each rename and never
/// overwritten. A rename that fails is logged and recorded; the remaining
/// steps still run.
pub fn execute_plan(
    plan: Vec<PlanStep>,
    directory: &Path,
    dry_run: bool,
    log: &RunLog,
) -> Vec<FileOutcome> {
    log.debug("Starting the renaming process...");

    let outcomes = plan
        .into_iter()
        .map(|step| execute_step(step, directory, dry_run, log))
        .collect();

    log.debug("Finished the renaming process");
    outcomes
}

fn execute_step(step: PlanStep, directory: &Path, dry_run: bool, log: &RunLog) -> FileOutcome {
    let planned = match step {
        PlanStep::Rename(planned) => planned,
        PlanStep::Skip { file, reason } => return skipped(file, reason, log),
    };

    let from = directory.join(&planned.source);
    let to = directory.join(&planned.target);

    // On case-insensitive filesystems a case-only change resolves to the source itself
    if to.exists() && !is_same_file(&from, &to).unwrap_or(false) {
        return skipped(planned.source, SkipReason::TargetExists(planned.target), log);
    }

    if dry_run {
        log.info(format!(
            "Would rename '{}' to '{}'",
            planned.source, planned.target
        ));
        return FileOutcome::WouldRename {
            from: planned.source,
            to: planned.target,
        };
    }

    match fs::rename(&from, &to) {
        Ok(()) => {
            log.info(format!(
                "Renamed '{}' to '{}'",
                planned.source, planned.target
            ));
            FileOutcome::Renamed {
                from: planned.source,
                to: planned.target,
            }
        }
        Err(e) => {
            log.error(format!(
                "Failed to rename '{}' to '{}': {}",
                planned.source, planned.target, e
            ));
            FileOutcome::Failed {
                file: planned.source,
                target: planned.target,
                error: e.to_string(),
            }
        }
    }
}

fn skipped(file: String, reason: SkipReason, log: &RunLog) -> FileOutcome {
    log.info(format!("Skipping file '{}' -- {}", file, reason));
    FileOutcome::Skipped { file, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_name_padding() {
        assert_eq!(target_name(1, "Introduction", "mp4"), "001-Introduction.mp4");
        assert_eq!(target_name(42, "Traits", "MP4"), "042-Traits.MP4");
        assert_eq!(target_name(1234, "Appendix", "mp4"), "1234-Appendix.mp4");
    }

    #[test]
    fn test_plain_name_check() {
        assert!(is_plain_name("001-Intro.mp4"));
        assert!(!is_plain_name("001-TCP/IP.mp4"));
        assert!(!is_plain_name("001-a\\b.mp4"));
    }

    #[test]
    fn test_skip_reason_messages() {
        assert_eq!(SkipReason::NoPatternMatch.to_string(), "no match found");
        assert_eq!(
            SkipReason::IndexUnmapped(2).to_string(),
            "index 2 not found in numbering file"
        );
    }
}
