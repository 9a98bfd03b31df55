//! # Ambry Support
//!
//! Shared utilities for the Ambry container crates.
//!
//! Currently this is text rendering for human-friendly error messages.

pub mod rendering;
