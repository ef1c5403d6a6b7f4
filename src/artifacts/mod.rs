//! Scan data structures and pure logic
//!
//! This module contains the value types and lookup logic of a scan:
//!
//! - `metadata`: Suffix-based Salesforce metadata classification
//! - `status`: Working tree change states and the git collaborator
//! - `report`: File records and Markdown table rendering

pub mod metadata;
pub mod report;
pub mod status;
