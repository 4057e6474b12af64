//! Utilities - run logging and terminal styling

pub mod logging;
pub mod rotate;
pub mod styling;

pub use logging::*;
pub use rotate::*;
pub use styling::*;
