//! Configuration and request-file error types.

/// What went wrong while loading settings or a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Request file could not be read
    #[display("Failed to read request file {}: {}", path, reason)]
    ReadRequest {
        /// Path that was requested
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// Request file is not a valid request
    #[display("Failed to parse request file: {}", _0)]
    ParseRequest(String),
    /// Layered studio configuration failed to build or deserialize
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use prompt_studio_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::ParseRequest("missing field `module`".into()));
/// assert!(err.to_string().contains("missing field `module`"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
