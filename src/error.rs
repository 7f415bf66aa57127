//! Error types for the persistence boundary.
//!
//! The in-memory operations never fail: absence of a match is reported
//! through boolean or empty-sequence returns, not errors. Only saving and
//! loading the XML document can go wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading an address book document.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The target file does not exist.
    #[error("address book file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document content could not be parsed as an address book.
    #[error("malformed address book document: {0}")]
    MalformedDocument(#[from] quick_xml::DeError),

    /// Any other I/O failure while reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_path() {
        let err = PersistenceError::NotFound(PathBuf::from("/tmp/contacts.xml"));
        assert_eq!(
            err.to_string(),
            "address book file not found: /tmp/contacts.xml"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PersistenceError::from(io);
        assert!(err.to_string().contains("denied"));
    }
}
