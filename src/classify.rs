use crate::error::ListError;
use crate::reader::{entry_name, read_entries};
use rustix::fs::{Access, access};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Executable,
    Other,
}

impl EntryKind {
    #[must_use]
    pub fn suffix(self) -> Option<char> {
        match self {
            EntryKind::Directory => Some('/'),
            EntryKind::Executable => Some('*'),
            EntryKind::Other => None,
        }
    }

    #[must_use]
    pub fn decorate(self, name: &str) -> String {
        match self.suffix() {
            Some(c) => format!("{name}{c}"),
            None => name.to_string(),
        }
    }
}

/// Directories take precedence over executables.
///
/// Executability is what `access(2)` reports for this process, so a file whose
/// only execute bit belongs to another user or group is not marked. An entry
/// that cannot be resolved (dangling link, vanished file) gets no suffix.
#[must_use]
pub fn classify(path: &Path) -> EntryKind {
    if path.is_dir() {
        EntryKind::Directory
    } else if access(path, Access::EXEC_OK).is_ok() {
        EntryKind::Executable
    } else {
        EntryKind::Other
    }
}

pub fn list_files_with_classification(dirname: &str) -> Result<Vec<String>, ListError> {
    let classified: Vec<String> = read_entries(dirname)?
        .iter()
        .map(|entry| classify(entry.path()).decorate(&entry_name(entry)))
        .collect();
    Ok(classified)
}
