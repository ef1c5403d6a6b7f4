/// Change state of a scanned file relative to the last recorded snapshot.
///
/// `Unknown` is only produced when state detection is disabled; detection
/// failures degrade to `Unmodified` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileState {
    Created,
    Changed,
    #[default]
    Unmodified,
    Unknown,
}

impl FileState {
    /// Interprets the leading status code of a `git status --porcelain` line.
    ///
    /// Leading whitespace is trimmed first, so an unstaged modification
    /// (`" M path"`) reads the same as a staged one (`"M  path"`). Codes
    /// other than additions and modifications, including untracked (`??`)
    /// and empty output, count as unmodified.
    pub fn from_porcelain(line: &str) -> Self {
        let code = line.trim_start();

        if code.starts_with('A') {
            FileState::Created
        } else if code.starts_with('M') {
            FileState::Changed
        } else {
            FileState::Unmodified
        }
    }
}

impl From<&FileState> for &str {
    fn from(state: &FileState) -> Self {
        match state {
            FileState::Created => "Created",
            FileState::Changed => "Changed",
            FileState::Unmodified => "Unmodified",
            FileState::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state_str: &str = self.into();
        write!(f, "{}", state_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_addition_is_created() {
        assert_eq!(FileState::from_porcelain("A  Foo.cls"), FileState::Created);
    }

    #[test]
    fn staged_modification_is_changed() {
        assert_eq!(FileState::from_porcelain("M  Foo.cls"), FileState::Changed);
    }

    #[test]
    fn unstaged_modification_is_changed() {
        assert_eq!(FileState::from_porcelain(" M Foo.cls"), FileState::Changed);
    }

    #[test]
    fn untracked_counts_as_unmodified() {
        assert_eq!(
            FileState::from_porcelain("?? Foo.cls"),
            FileState::Unmodified
        );
    }

    #[test]
    fn deletion_counts_as_unmodified() {
        assert_eq!(
            FileState::from_porcelain("D  Foo.cls"),
            FileState::Unmodified
        );
    }

    #[test]
    fn empty_output_is_unmodified() {
        assert_eq!(FileState::from_porcelain(""), FileState::Unmodified);
    }

    #[test]
    fn states_render_their_table_labels() {
        assert_eq!(FileState::Created.to_string(), "Created");
        assert_eq!(FileState::Changed.to_string(), "Changed");
        assert_eq!(FileState::Unmodified.to_string(), "Unmodified");
        assert_eq!(FileState::Unknown.to_string(), "Unknown");
    }
}
