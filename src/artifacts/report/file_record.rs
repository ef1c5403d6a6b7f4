use crate::artifacts::status::file_state::FileState;
use derive_new::new;
use std::path::PathBuf;

/// One row of the component report, immutable once constructed.
///
/// Records keep directory-walk discovery order; an empty `metadata_type`
/// means the file matched no known suffix.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileRecord {
    pub state: FileState,
    pub name: String,
    pub metadata_type: String,
    pub path: PathBuf,
}
