//! Application layer managing state and user workflows.
//!
//! This module owns the applied-jobs store and the job board state that
//! the presentation layer renders.

pub mod state;
pub mod store;

pub use state::*;
pub use store::*;
