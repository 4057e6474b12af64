//! Rename summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{FileOutcome, SkipReason};

/// Counts and details of one rename run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    pub candidates: usize,
    pub renamed: Vec<(String, String)>,
    pub planned: Vec<(String, String)>,
    pub skipped: Vec<(String, SkipReason)>,
    pub failed: Vec<(String, String)>,
}

impl RenameSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut summary = Self {
            candidates: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome {
                FileOutcome::Renamed { from, to } => summary.renamed.push((from.clone(), to.clone())),
                FileOutcome::WouldRename { from, to } => {
                    summary.planned.push((from.clone(), to.clone()))
                }
                FileOutcome::Skipped { file, reason } => {
                    summary.skipped.push((file.clone(), reason.clone()))
                }
                FileOutcome::Failed { file, error, .. } => {
                    summary.failed.push((file.clone(), error.clone()))
                }
            }
        }

        summary
    }

    /// Skips caused by the pattern not yielding an index
    pub fn unmatched(&self) -> usize {
        self.count_skipped(|r| matches!(r, SkipReason::NoPatternMatch))
    }

    /// Skips caused by an index missing from the numbering table
    pub fn unmapped(&self) -> usize {
        self.count_skipped(|r| matches!(r, SkipReason::IndexUnmapped(_)))
    }

    /// Skips caused by a name clash, within the run or on disk
    pub fn conflicts(&self) -> usize {
        self.count_skipped(|r| {
            matches!(
                r,
                SkipReason::DuplicateTarget(_) | SkipReason::TargetExists(_)
            )
        })
    }

    fn count_skipped(&self, predicate: impl Fn(&SkipReason) -> bool) -> usize {
        self.skipped.iter().filter(|(_, r)| predicate(r)).count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RENAME SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🎬 Candidate Files"),
            Cell::new(self.candidates),
        ]);

        if self.planned.is_empty() {
            table.add_row(vec![
                Cell::new("✅ Renamed"),
                Cell::new(self.renamed.len())
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
        } else {
            table.add_row(vec![
                Cell::new("📝 Would Rename"),
                Cell::new(self.planned.len())
                    .fg(Color::Cyan)
                    .add_attribute(Attribute::Bold),
            ]);
        }

        for (label, count) in [
            ("❔ Skipped (No Match)", self.unmatched()),
            ("🔢 Skipped (Unmapped)", self.unmapped()),
            ("⛔ Skipped (Conflict)", self.conflicts()),
        ] {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(count).fg(if count == 0 {
                    Color::White
                } else {
                    Color::Yellow
                }),
            ]);
        }

        let other = self.skipped.len() - self.unmatched() - self.unmapped() - self.conflicts();
        if other > 0 {
            table.add_row(vec![Cell::new("➖ Skipped (Other)"), Cell::new(other)]);
        }

        if self.has_failures() {
            table.add_row(vec![
                Cell::new("❌ Failed"),
                Cell::new(self.failed.len())
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
            ]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.skipped.is_empty() || self.has_failures() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("UNTOUCHED FILES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();

            for (file, reason) in &self.skipped {
                println!("      {} {} {}", style("•").dim(), file, style(reason).dim());
            }
            for (file, error) in &self.failed {
                println!("      {} {} {}", style("•").red(), file, style(error).red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let outcomes = vec![
            FileOutcome::Renamed {
                from: "lesson1.mp4".into(),
                to: "001-Intro.mp4".into(),
            },
            FileOutcome::Skipped {
                file: "lesson2.mp4".into(),
                reason: SkipReason::IndexUnmapped(2),
            },
            FileOutcome::Skipped {
                file: "clip.mp4".into(),
                reason: SkipReason::NoPatternMatch,
            },
            FileOutcome::Skipped {
                file: "lesson3.mp4".into(),
                reason: SkipReason::TargetExists("003-End.mp4".into()),
            },
        ];

        let summary = RenameSummary::from_outcomes(&outcomes);
        assert_eq!(summary.candidates, 4);
        assert_eq!(summary.renamed.len(), 1);
        assert_eq!(summary.unmapped(), 1);
        assert_eq!(summary.unmatched(), 1);
        assert_eq!(summary.conflicts(), 1);
        assert!(!summary.has_failures());
    }
}
