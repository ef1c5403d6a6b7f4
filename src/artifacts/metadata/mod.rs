//! Salesforce metadata classification
//!
//! This module maps filenames to Salesforce metadata types by suffix:
//!
//! - `suffix_table`: The static ordered suffix-to-type mapping
//! - `classifier`: First-match-wins lookup and display-name stripping

pub mod classifier;
pub mod suffix_table;
