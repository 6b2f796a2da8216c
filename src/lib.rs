//! HireConnect - Terminal Job Board Library
//!
//! Browse job postings, search them, and keep track of which ones you
//! applied to across sessions.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod config;

pub use domain::*;
pub use application::*;
