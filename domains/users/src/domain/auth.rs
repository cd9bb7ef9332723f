//! Authentication outcomes for the users domain
//!
//! Login failures are ordinary values, not panics. Callers translate the
//! stable `code()` strings into API responses; the code spellings are
//! wire-compatible with the upstream identity service and must not change.

use thiserror::Error;

/// Confirmation message returned on a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Autenticado correctamente";

/// Outcome of a password login attempt
pub type LoginResult = Result<&'static str, AuthError>;

/// Errors that can occur during password login
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("user account is not active")]
    NotActive,

    #[error("password does not match the stored credential")]
    PasswordMismatch,
}

impl AuthError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NotActive => "Autentication.NotActive",
            AuthError::PasswordMismatch => "Autentication.NotMatchPassword",
        }
    }
}
