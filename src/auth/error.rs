//! Error taxonomy for the auth flow.
//!
//! Every failure a submit can hit is reduced to one of these variants, and
//! each variant's `Display` output is the exact string shown to the user.
//! Nothing here panics past the submit boundary.

/// Local precondition failure. Never reaches the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Password must contain at least one letter and one number")]
    PasswordNeedsLetterAndDigit,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Any failure of a submit attempt. Terminal for the attempt; the form
/// stays ready for another user-initiated submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Input failed a local check.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The page is missing its embedded CSRF token; aborts before any
    /// network call.
    #[error("CSRF token not found. Please refresh the page.")]
    CsrfTokenMissing,
    /// Non-success response from the backend, already rendered for
    /// display.
    #[error("{0}")]
    Service(String),
    /// Transport failure, or a response body we could not make sense of.
    #[error("{0}")]
    Unexpected(String),
}

/// Shown when a failure carries no usable message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";
