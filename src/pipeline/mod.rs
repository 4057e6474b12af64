//! Pipeline module - orchestrates the rename steps

pub mod numbering;
pub mod pattern;
pub mod renamer;
pub mod run;
pub mod selector;

pub use numbering::*;
pub use pattern::*;
pub use renamer::*;
pub use run::*;
pub use selector::*;
