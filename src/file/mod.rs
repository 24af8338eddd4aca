//! File input for batches of mutation path expressions.
//!
//! This module loads expression lists from disk or stdin and parses every
//! line, keeping per-line outcomes so callers can report each one.

pub mod loader;
