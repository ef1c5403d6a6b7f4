use crate::areas::inventory::{Inventory, UnknownFilePolicy};
use crate::artifacts::metadata::classifier;
use crate::artifacts::report::file_record::FileRecord;
use crate::artifacts::report::markdown;
use crate::artifacts::status::file_state::FileState;
use crate::artifacts::status::git::GitStatus;
use std::io::Write;

impl Inventory {
    /// Walks the workspace, classifies and state-tags every file, and
    /// writes the rendered Markdown table to the output stream.
    pub fn scan(&self) -> anyhow::Result<()> {
        let records = self.collect_records();
        let table = markdown::render_table(&records);

        writeln!(self.writer(), "{}", table)?;

        Ok(())
    }

    // Records accumulate in discovery order; the renderer keeps that order.
    fn collect_records(&self) -> Vec<FileRecord> {
        let git = GitStatus::new(self.workspace().path());

        self.workspace()
            .list_files()
            .filter_map(|file_path| {
                let file_name = file_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let (name, metadata_type) = match classifier::classify(&file_name) {
                    Some(classification) => (
                        classification.display_name,
                        classification.metadata_type.to_string(),
                    ),
                    None if self.options().unknown_files == UnknownFilePolicy::Exclude => {
                        return None;
                    }
                    None => (file_name, String::new()),
                };

                let state = if self.options().detect_states {
                    git.file_state(&file_path)
                } else {
                    FileState::Unknown
                };

                Some(FileRecord::new(state, name, metadata_type, file_path))
            })
            .collect()
    }
}
