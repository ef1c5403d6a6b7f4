//! Scan report records and rendering
//!
//! This module accumulates and renders what a scan found:
//!
//! - `file_record`: One immutable row of the report
//! - `markdown`: Pipe-table rendering of an ordered record sequence

pub mod file_record;
pub mod markdown;
