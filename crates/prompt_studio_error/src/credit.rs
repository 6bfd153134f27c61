//! Credit metering error types.

/// Specific error conditions for credit operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CreditErrorKind {
    /// Balance does not cover the requested amount
    #[display("Insufficient credits: requested {}, available {}", requested, available)]
    Insufficient {
        /// Credits the operation costs
        requested: u32,
        /// Credits left in the ledger
        available: u32,
    },
    /// Plan name is not one of the known tiers
    #[display("Unknown plan '{}'", _0)]
    InvalidPlan(String),
}

/// Error type for credit operations.
///
/// # Examples
///
/// ```
/// use prompt_studio_error::{CreditError, CreditErrorKind};
///
/// let err = CreditError::new(CreditErrorKind::Insufficient { requested: 10, available: 4 });
/// assert!(format!("{}", err).contains("Insufficient"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Credit Error: {} at line {} in {}", kind, line, file)]
pub struct CreditError {
    /// The specific error condition
    pub kind: CreditErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CreditError {
    /// Create a new CreditError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CreditErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
