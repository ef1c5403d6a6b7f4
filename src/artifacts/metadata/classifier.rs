use crate::artifacts::metadata::suffix_table::METADATA_SUFFIXES;

/// The outcome of matching a filename against the suffix table: the metadata
/// type and the filename with the matched suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub metadata_type: &'static str,
    pub display_name: String,
}

/// Looks up the first table entry whose suffix ends the given filename.
///
/// Returns `None` for filenames that match no known metadata suffix; the
/// caller decides whether such files are reported or skipped.
pub fn classify(file_name: &str) -> Option<Classification> {
    METADATA_SUFFIXES
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
        .map(|(suffix, metadata_type)| Classification {
            metadata_type,
            display_name: file_name[..file_name.len() - suffix.len()].to_string(),
        })
}
