use crate::areas::workspace::Workspace;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Policy for files whose name matches no known metadata suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFilePolicy {
    /// Report the file with an empty type and its full name.
    #[default]
    Include,
    /// Leave the file out of the report.
    Exclude,
}

#[derive(Debug, Clone, Copy, new)]
pub struct ScanOptions {
    pub unknown_files: UnknownFilePolicy,
    pub detect_states: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            unknown_files: UnknownFilePolicy::default(),
            detect_states: true,
        }
    }
}

pub struct Inventory {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    options: ScanOptions,
}

impl Inventory {
    pub fn new(
        path: &str,
        options: ScanOptions,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.is_dir() {
            anyhow::bail!("Directory {:?} not found", path);
        }

        let path = path.canonicalize()?;
        let workspace = Workspace::new(path.into_boxed_path());

        Ok(Inventory {
            writer: RefCell::new(writer),
            workspace,
            options,
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
