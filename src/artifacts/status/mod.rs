//! Working tree change states
//!
//! This module labels scanned files with their version-control state:
//!
//! - `file_state`: The state enum and porcelain status-code parsing
//! - `git`: Best-effort `git status` subprocess collaborator

pub mod file_state;
pub mod git;
