//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Saved prompt not found in the library
    #[display("Prompt not found: {}", _0)]
    NotFound(String),
    /// I/O error while reading or writing a library file
    #[display("I/O error: {}", _0)]
    Io(String),
    /// Library file exists but could not be decoded
    #[display("Corrupt library file: {}", _0)]
    Corrupt(String),
    /// Library could not be encoded for writing
    #[display("Serialization failed: {}", _0)]
    Serialize(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use prompt_studio_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("k3x9a".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
