//! Command implementations
//!
//! The binary exposes a single user-facing operation:
//!
//! - `scan`: Walk the root directory, classify and state-tag every file,
//!   and print the component report as a Markdown table.

pub mod scan;
