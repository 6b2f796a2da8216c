//! Infrastructure layer providing the local persistence slots.
//!
//! File-backed and in-memory slot storage, plus the codec for the
//! applied-jobs slot.

pub mod persistence;

pub use persistence::*;
