use crate::classify::classify;
use crate::error::ListError;
use crate::reader::{entry_name, read_entries};
use crate::types::{EntryDetail, ScannedEntry};
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::io;
use std::time::SystemTime;
use walkdir::DirEntry;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the detail row for an entry. Directories always report size 0.
#[must_use]
pub fn entry_detail(name: &str, metadata: &Metadata) -> EntryDetail {
    // Unreadable mtime falls back to the epoch
    let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
    let size = if metadata.is_dir() { 0 } else { metadata.len() };
    EntryDetail::new(format_timestamp(modified), size, name)
}

/// Stats an entry, following symlinks.
///
/// A dangling symlink is described by the link itself. Returns `Ok(None)` only
/// when the entry disappeared after it was enumerated.
pub(crate) fn stat_entry(dirname: &str, entry: &DirEntry) -> Result<Option<Metadata>, ListError> {
    match fs::metadata(entry.path()) {
        Ok(metadata) => return Ok(Some(metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(ListError::Io {
                dirname: dirname.to_string(),
                source: e,
            });
        }
    }

    // walkdir does not follow links below the root, so this is an lstat
    match entry.metadata() {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.io_error().is_some_and(|io| io.kind() == io::ErrorKind::NotFound) => {
            log::warn!(
                "Skipping '{}': vanished before it could be inspected",
                entry.path().display()
            );
            Ok(None)
        }
        Err(e) => Err(ListError::Io {
            dirname: dirname.to_string(),
            source: e.into(),
        }),
    }
}

pub fn list_files_with_details(dirname: &str) -> Result<Vec<EntryDetail>, ListError> {
    let mut details = Vec::new();
    for entry in read_entries(dirname)? {
        if let Some(metadata) = stat_entry(dirname, &entry)? {
            details.push(entry_detail(&entry_name(&entry), &metadata));
        }
    }
    Ok(details)
}

/// One enumeration pass collecting detail and classification together.
pub fn scan_entries(dirname: &str) -> Result<Vec<ScannedEntry>, ListError> {
    let mut scanned = Vec::new();
    for entry in read_entries(dirname)? {
        if let Some(metadata) = stat_entry(dirname, &entry)? {
            scanned.push(ScannedEntry {
                detail: entry_detail(&entry_name(&entry), &metadata),
                kind: classify(entry.path()),
            });
        }
    }
    Ok(scanned)
}
