use crate::artifacts::status::file_state::FileState;
use derive_new::new;
use std::path::Path;
use std::process::Command;

/// Best-effort `git status` collaborator rooted at the scan directory.
///
/// Every failure mode (git missing, not a repository, non-zero exit,
/// undecodable output) resolves to [`FileState::Unmodified`]; the report
/// must come out whether or not version control is present.
#[derive(Debug, new)]
pub struct GitStatus<'w> {
    root: &'w Path,
}

impl GitStatus<'_> {
    /// Queries the working-tree state of a single file, given relative to
    /// the scan root.
    pub fn file_state(&self, file_path: &Path) -> FileState {
        self.query_porcelain(file_path)
            .map(|line| FileState::from_porcelain(&line))
            .unwrap_or_default()
    }

    fn query_porcelain(&self, file_path: &Path) -> Option<String> {
        let output = Command::new("git")
            .arg("status")
            .arg("--porcelain")
            .arg("--")
            .arg(file_path)
            .current_dir(self.root)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        String::from_utf8(output.stdout).ok()
    }
}
