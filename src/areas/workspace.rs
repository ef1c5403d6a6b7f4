use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily yields every regular file under the workspace root as a path
    /// relative to it, recursing through all subdirectories.
    ///
    /// No name or suffix filtering happens here. Unreadable entries are
    /// skipped and the walk continues. Order is whatever the platform
    /// traversal yields; callers must not rely on it.
    pub fn list_files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(self.path.as_ref())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(PathBuf::from)
            })
    }
}
