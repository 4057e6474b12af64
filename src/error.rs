//! Error types for the rename pipeline.
//!
//! Run-level failures live in [`RenameError`]. Conditions that only affect a
//! single file are not errors: they are recorded as a
//! [`SkipReason`](crate::pipeline::SkipReason) and the run carries on.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a run before (or instead of) renaming anything.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The operator declined the confirmation prompt.
    #[error("aborted by user, no files were renamed")]
    UserAborted,

    /// A command-line argument is missing or unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The numbering file parsed, but produced no usable entries.
    #[error("no valid entries found in numbering file '{}'", .path.display())]
    EmptyMapping { path: PathBuf },

    /// The working directory holds no file with the requested extension.
    #[error("no .{extension} files found in '{}'", .directory.display())]
    NoCandidates {
        directory: PathBuf,
        extension: String,
    },

    /// Any filesystem failure outside the per-file rename itself.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Problems with the run configuration. Always fatal, always raised before
/// the first mutation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("numbering file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("pattern '{0}' does not contain a wildcard ('*') or a capture group")]
    MissingWildcard(String),

    #[error("pattern '{pattern}' has no capture group for the index")]
    MissingCaptureGroup { pattern: String },

    #[error(
        "pattern '{pattern}' is not a valid regular expression \
         (use '*' for the index to match literal parentheses): {source}"
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),
}

impl RenameError {
    /// Wrap an I/O error with a short description of what was being done.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        RenameError::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this outcome should end the process with a zero status.
    ///
    /// Declining the prompt and finding nothing to rename are normal ways for
    /// a run to end.
    pub fn is_clean_exit(&self) -> bool {
        matches!(
            self,
            RenameError::UserAborted | RenameError::NoCandidates { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RenameError>;
