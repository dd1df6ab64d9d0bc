use crate::error::ListError;
use walkdir::{DirEntry, WalkDir};

/// Enumerates the direct children of `dirname` in the order the OS returns them.
pub fn read_entries(dirname: &str) -> Result<Vec<DirEntry>, ListError> {
    let mut walker = WalkDir::new(dirname).max_depth(1).into_iter();

    // The first item is the root itself; walkdir reports a missing root here.
    let root = match walker.next() {
        Some(root) => root.map_err(|e| ListError::from_io(dirname, e.into()))?,
        None => return Ok(Vec::new()),
    };
    if !root.file_type().is_dir() {
        return Err(ListError::NotADirectory {
            dirname: dirname.to_string(),
        });
    }

    walker
        .map(|entry| entry.map_err(|e| ListError::from_io(dirname, e.into())))
        .collect()
}

#[must_use]
pub fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

pub fn list_files_in_directory(dirname: &str) -> Result<Vec<String>, ListError> {
    let names: Vec<String> = read_entries(dirname)?.iter().map(entry_name).collect();
    log::debug!("{} entries in '{}'", names.len(), dirname);
    Ok(names)
}
