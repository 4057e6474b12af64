//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use tempfile::TempDir;
use tocrename::config::RunConfig;
use tocrename::pipeline::MatchRule;
use tocrename::utils::LogSettings;

/// Numbering file contents used by most tests
pub const SAMPLE_NUMBERING: &str = "\
001 - Introduction
002 - Getting Started
003 - The Basics
004 - Advanced Concepts
005 - Conclusion
";

/// Name of the numbering file created by the fixtures
pub const NUMBERING_FILE: &str = "Table of contents numbering.txt";

/// Write a numbering file into `dir` and return its path
pub fn create_numbering_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(NUMBERING_FILE);
    fs::write(&path, contents).unwrap();
    path
}

/// Create empty files with the given names
pub fn touch_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

/// Sorted names of every regular file in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Create a scratch directory with lesson videos and a numbering file
pub fn create_lesson_dir(videos: &[&str], numbering: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    touch_files(temp_dir.path(), videos);
    let numbering_path = create_numbering_file(temp_dir.path(), numbering);
    (temp_dir, numbering_path)
}

/// Build a run configuration without going through clap
pub fn test_config(directory: &Path, numbering_file: &Path, pattern: &str) -> RunConfig {
    RunConfig {
        rule: MatchRule::from_pattern(pattern).unwrap(),
        numbering_file: numbering_file.to_path_buf(),
        directory: directory.to_path_buf(),
        extension: "mp4".to_string(),
        dry_run: false,
        no_confirm: false,
        log: LogSettings {
            level: LevelFilter::Debug,
            console: false,
            file: None,
            ..Default::default()
        },
    }
}
