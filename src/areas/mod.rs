//! Stateful scan components
//!
//! This module contains the components that touch the file system:
//!
//! - `workspace`: Recursive directory enumeration under the scan root
//! - `inventory`: High-level scan coordination and output

pub mod inventory;
pub mod workspace;
