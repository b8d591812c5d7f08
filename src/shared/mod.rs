//! Shared Module
//!
//! This module contains the types that mirror the library service's wire
//! contract, plus the error taxonomy used throughout the client. All wire
//! types are designed for serialization and transmission over HTTP.

/// Authentication wire contract
pub mod auth;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use auth::{ApiMessage, AuthResponse, LoginRequest, RegisterRequest, Role, User};
pub use error::{AuthError, AuthFlowError, ValidationError};
