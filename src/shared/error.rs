//! Shared Error Types
//!
//! This module defines the error taxonomy for the authentication flow.
//! Errors fall into two categories that surface identically to the user
//! (inline text plus a toast) but are produced at different points:
//!
//! - `ValidationError` - raised locally, before any network call is made
//! - `AuthError` - anything that comes back from the service boundary:
//!   a rejection, a transport failure, or an unreadable response
//!
//! `AuthFlowError` unifies the two so the form can hold either by value.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and cross the worker-thread channel.
use thiserror::Error;

/// Local validation failure, detected before contacting the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email field left empty
    #[error("Email address is required")]
    EmptyEmail,

    /// Email field does not look like an address
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Password shorter than the 8-character minimum
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    /// Name field left empty on registration
    #[error("Full name is required")]
    EmptyName,

    /// Password and confirmation differ on registration
    #[error("Passwords don't match")]
    PasswordMismatch,
}

/// Failure from the authentication service boundary.
///
/// The flow treats every variant the same way (show the message, release
/// the submit flag, no retry); the kind is kept so internal code can make
/// one decision the user never sees: a `Rejected` stored token is deleted,
/// a `Network` failure keeps it for the next start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The service answered and said no (invalid credentials, duplicate
    /// email, expired token, ...)
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never completed
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered 2xx but the body could not be read
    #[error("Malformed server response: {message}")]
    Malformed { message: String },
}

impl AuthError {
    /// Create a rejection error from a status code and message
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Whether the service itself rejected the request, as opposed to the
    /// request never reaching it
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::malformed(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

/// Either side of the submission error taxonomy, held by the form for
/// inline display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFlowError {
    /// Caught locally, no network call was made
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Came back from the service
    #[error("{0}")]
    Service(#[from] AuthError),
}
