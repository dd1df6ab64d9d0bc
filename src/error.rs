use std::io;
use thiserror::Error;

/// Errors raised while listing a directory.
///
/// The `Display` text of the recoverable variants is the diagnostic printed to
/// stderr.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Directory '{dirname}' not found.")]
    NotFound { dirname: String },

    #[error("Permission denied to access '{dirname}'.")]
    PermissionDenied { dirname: String },

    #[error("'{dirname}' is not a directory.")]
    NotADirectory { dirname: String },

    #[error("Failed to list '{dirname}': {source}")]
    Io {
        dirname: String,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    #[must_use]
    pub fn from_io(dirname: &str, err: io::Error) -> Self {
        let dirname = dirname.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => ListError::NotFound { dirname },
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied { dirname },
            io::ErrorKind::NotADirectory => ListError::NotADirectory { dirname },
            _ => ListError::Io {
                dirname,
                source: err,
            },
        }
    }

    /// NotFound and PermissionDenied end up as a diagnostic plus an empty listing.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ListError::NotFound { .. } | ListError::PermissionDenied { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_kinds() {
        let err = ListError::from_io("missing", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ListError::NotFound { ref dirname } if dirname == "missing"));

        let err = ListError::from_io("locked", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ListError::PermissionDenied { .. }));

        let err = ListError::from_io("file.txt", io::Error::from(io::ErrorKind::NotADirectory));
        assert!(matches!(err, ListError::NotADirectory { .. }));

        let err = ListError::from_io("dev", io::Error::other("disk on fire"));
        assert!(matches!(err, ListError::Io { .. }));
    }

    #[test]
    fn test_diagnostic_text() {
        let err = ListError::NotFound {
            dirname: "non_existent_directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Directory 'non_existent_directory' not found."
        );

        let err = ListError::PermissionDenied {
            dirname: "/root".to_string(),
        };
        assert_eq!(err.to_string(), "Permission denied to access '/root'.");
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ListError::NotFound { dirname: "a".into() }.is_recoverable());
        assert!(ListError::PermissionDenied { dirname: "a".into() }.is_recoverable());
        assert!(!ListError::NotADirectory { dirname: "a".into() }.is_recoverable());
        assert!(
            !ListError::Io {
                dirname: "a".into(),
                source: io::Error::other("boom"),
            }
            .is_recoverable()
        );
    }
}
