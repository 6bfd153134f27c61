//! Error types for the Prompt Studio workspace.
//!
//! The prompt engine itself never fails; these types cover the collaborators
//! around it (configuration, the saved-prompt library, export, and credit
//! metering).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod credit;
mod export;
mod storage;

pub use config::{ConfigError, ConfigErrorKind};
pub use credit::{CreditError, CreditErrorKind};
pub use export::ExportError;
pub use storage::{StorageError, StorageErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum StudioErrorKind {
    /// Configuration or request-file error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Saved-prompt library persistence error
    #[display("{}", _0)]
    Storage(StorageError),
    /// Credit metering error
    #[display("{}", _0)]
    Credit(CreditError),
    /// Export rendering error
    #[display("{}", _0)]
    Export(ExportError),
}

/// Prompt Studio error with kind discrimination.
#[derive(Debug)]
pub struct StudioError(Box<StudioErrorKind>);

impl StudioError {
    /// Create a new error from a kind.
    pub fn new(kind: StudioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StudioErrorKind {
        &self.0
    }
}

impl std::fmt::Display for StudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prompt Studio Error: {}", self.0)
    }
}

impl std::error::Error for StudioError {}

// Generic From implementation for any type that converts to StudioErrorKind
impl<T> From<T> for StudioError
where
    T: Into<StudioErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Prompt Studio operations.
pub type StudioResult<T> = std::result::Result<T, StudioError>;
