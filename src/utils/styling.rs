//! Terminal styling utilities for console output

use console::{style, Emoji};

use crate::config::RunConfig;

// Emoji icons with fallbacks for terminals that don't support them
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static FILM: Emoji<'_, '_> = Emoji("🎬 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("tocrename").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Rename videos after their table of contents").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(config: &RunConfig) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Directory: {:<36}│",
        FOLDER,
        truncate_string(&config.directory.display().to_string(), 35)
    );
    println!(
        "    │  {} Numbering: {:<36}│",
        FILE,
        truncate_string(&config.numbering_file.display().to_string(), 35)
    );
    println!(
        "    │  {} Pattern:   {:<36}│",
        TARGET,
        truncate_string(config.rule.as_str(), 35)
    );
    println!(
        "    │  {} Extension: {:<36}│",
        FILM,
        style(format!(".{}", config.extension)).yellow()
    );
    if config.dry_run {
        println!("    ├{}┤", line);
        println!(
            "    │  {:<51}│",
            style("Dry run: no file will be renamed").yellow().bold()
        );
    }
    println!("    └{}┘", line);
    println!();
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion(dry_run: bool) {
    let message = if dry_run {
        "Dry run complete!"
    } else {
        "Renaming complete!"
    };
    println!();
    println!("    {} {}", ROCKET, style(message).green().bold());
    println!();
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - max_len + 3).collect();
        format!("...{}", tail)
    }
}
