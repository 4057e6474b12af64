//! Validated run configuration

use std::path::PathBuf;

use crate::pipeline::MatchRule;
use crate::utils::LogSettings;

/// Everything a run needs, checked before the confirmation prompt
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Compiled filename pattern
    pub rule: MatchRule,
    /// Text file with the `<number> - <name>` entries
    pub numbering_file: PathBuf,
    /// Directory whose files are renamed
    pub directory: PathBuf,
    /// Lowercase extension without the dot
    pub extension: String,
    pub dry_run: bool,
    pub no_confirm: bool,
    pub log: LogSettings,
}

impl RunConfig {
    /// Text shown before asking for confirmation
    pub fn confirmation_message(&self) -> String {
        format!(
            "This will rename all .{} files in '{}' according to the names found in '{}'.",
            self.extension,
            self.directory.display(),
            self.numbering_file.display()
        )
    }
}
