//! Candidate file selection from the working directory

use std::fs;
use std::path::Path;

use crate::error::{RenameError, Result};
use crate::utils::RunLog;

/// Extension used when none is given on the command line
pub const DEFAULT_EXTENSION: &str = "mp4";

/// A directory entry eligible for renaming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name without any directory component
    pub name: String,
    /// Extension exactly as written on disk, without the dot
    pub extension: String,
}

impl CandidateFile {
    /// Build a candidate from a bare file name. Names without an extension
    /// give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?;
        Some(Self {
            name: name.to_string(),
            extension: extension.to_string(),
        })
    }
}

/// Normalize a user-supplied extension: leading dots dropped, lowercased
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

/// List regular files in `directory` whose extension matches `extension`
/// case-insensitively, sorted by name.
///
/// # Errors
/// * `RenameError::NoCandidates` when nothing matches
/// * `RenameError::Io` when the directory cannot be read
pub fn select_candidates(
    directory: &Path,
    extension: &str,
    log: &RunLog,
) -> Result<Vec<CandidateFile>> {
    log.debug("Getting all video file names");

    let entries = fs::read_dir(directory).map_err(|e| {
        RenameError::io(format!("Failed to list directory {}", directory.display()), e)
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            RenameError::io(format!("Failed to list directory {}", directory.display()), e)
        })?;

        if !entry.path().is_file() {
            continue;
        }

        let os_name = entry.file_name();
        let Some(name) = os_name.to_str() else {
            log.debug(format!(
                "Ignoring non UTF-8 file name {}",
                os_name.to_string_lossy()
            ));
            continue;
        };

        match CandidateFile::from_name(name) {
            Some(candidate) if candidate.extension.eq_ignore_ascii_case(extension) => {
                candidates.push(candidate);
            }
            _ => {}
        }
    }

    if candidates.is_empty() {
        return Err(RenameError::NoCandidates {
            directory: directory.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    log.debug(format!("Found {} candidate file(s)", candidates.len()));

    Ok(candidates)
}
