use crate::classify::EntryKind;

/// One row of the long listing: local mtime text, byte size, entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetail {
    pub last_modified: String,
    pub size: u64,
    pub name: String,
}

impl EntryDetail {
    pub fn new(last_modified: impl Into<String>, size: u64, name: impl Into<String>) -> Self {
        Self {
            last_modified: last_modified.into(),
            size,
            name: name.into(),
        }
    }
}

/// Detail and kind gathered from a single stat of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    pub detail: EntryDetail,
    pub kind: EntryKind,
}
