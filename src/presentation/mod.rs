//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the job board using ratatui and maps
//! key presses onto application operations.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
