//! Numbering file loader: `index - label` lines into a lookup table

use std::collections::btree_map::{self, BTreeMap};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, RenameError, Result};
use crate::utils::RunLog;

/// One parsed line of the numbering file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingEntry {
    pub index: u32,
    pub label: String,
}

/// Mapping from content index to display label, ordered by index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingTable {
    entries: BTreeMap<u32, String>,
}

impl NumberingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse numbering text. Malformed lines are skipped and logged at debug
    /// level; a repeated index keeps the later label.
    pub fn parse(text: &str, log: &RunLog) -> Self {
        let mut table = Self::new();
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(entry) => {
                    let index = entry.index;
                    if let Some(previous) = table.insert(entry) {
                        log.warn(format!(
                            "Index {} appears more than once, replacing '{}' (line {})",
                            index,
                            previous,
                            line_no + 1
                        ));
                    }
                }
                None => log.debug(format!(
                    "Ignoring line {}: '{}'",
                    line_no + 1,
                    line.trim()
                )),
            }
        }

        table
    }

    /// Insert an entry, returning the label it replaced
    pub fn insert(&mut self, entry: NumberingEntry) -> Option<String> {
        self.entries.insert(entry.index, entry.label)
    }

    pub fn get(&self, index: u32) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn contains(&self, index: u32) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, String> {
        self.entries.iter()
    }
}

impl FromIterator<NumberingEntry> for NumberingTable {
    fn from_iter<I: IntoIterator<Item = NumberingEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|e| (e.index, e.label)).collect(),
        }
    }
}

/// Parse a single `<integer> - <label>` line.
///
/// The line is split on the first `-`, so labels may contain dashes of their
/// own. Returns `None` when there is no dash, the index part is not a plain
/// non-negative integer, or the label is empty.
pub fn parse_line(line: &str) -> Option<NumberingEntry> {
    let (number, label) = line.trim().split_once('-')?;

    let number = number.trim();
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = number.parse::<u32>().ok()?;

    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    Some(NumberingEntry {
        index,
        label: label.to_string(),
    })
}

/// Read and parse the numbering file at `path`.
///
/// # Errors
/// * `ConfigError::FileNotFound` if `path` is not an existing file
/// * `RenameError::Io` if the file cannot be read as UTF-8 text
/// * `RenameError::EmptyMapping` if no line produced an entry
pub fn load_numbering(path: &Path, log: &RunLog) -> Result<NumberingTable> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()).into());
    }

    log.debug(format!("Opening {}", path.display()));
    let text = fs::read_to_string(path).map_err(|e| {
        RenameError::io(format!("Failed to read numbering file {}", path.display()), e)
    })?;

    log.debug("Store the mapping of old numbers to new names");
    let table = NumberingTable::parse(&text, log);

    if table.is_empty() {
        return Err(RenameError::EmptyMapping {
            path: path.to_path_buf(),
        });
    }

    log.debug(format!("Loaded {} numbering entries", table.len()));
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_trims_both_sides() {
        let entry = parse_line("  7   -   Closures and Iterators  ").unwrap();
        assert_eq!(entry.index, 7);
        assert_eq!(entry.label, "Closures and Iterators");
    }

    #[test]
    fn test_parse_line_without_spaces() {
        let entry = parse_line("12-Traits").unwrap();
        assert_eq!(entry.index, 12);
        assert_eq!(entry.label, "Traits");
    }

    #[test]
    fn test_parse_line_rejects_signed_index() {
        assert!(parse_line("+3 - Plus").is_none());
    }

    #[test]
    fn test_parse_line_rejects_overflowing_index() {
        assert!(parse_line("99999999999 - Too big").is_none());
    }

    #[test]
    fn test_bom_is_ignored() {
        let table = NumberingTable::parse("\u{feff}1 - Intro\n", &RunLog::silent());
        assert_eq!(table.get(1), Some("Intro"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let table = NumberingTable::parse("1 - First\n1 - Second\n", &RunLog::silent());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1), Some("Second"));
    }
}
