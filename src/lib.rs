//! tocrename: Table of Contents Renamer Library
//!
//! Renames video files after the entries of a numbered table of contents:
//! parse `number - name` lines, select candidate files, extract the index
//! from each file name and rename it to `NNN-name.ext`.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use error::{ConfigError, RenameError};
