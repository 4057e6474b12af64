//! Report module - summarizing rename results

pub mod summary;

pub use summary::*;
