//! Authentication DTOs.

use zeroize::Zeroizing;

use crate::domain::entities::{AuthSession, Credentials, StrengthLevel};

/// Login request data.
#[derive(Clone)]
pub struct LoginRequest {
    /// Email as typed by the user.
    pub email: String,
    /// Password as typed by the user.
    pub password: Zeroizing<String>,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.as_str(), self.password.as_str())
    }
}

/// Signup request data.
#[derive(Clone)]
pub struct SignupRequest {
    /// Email as typed by the user.
    pub email: String,
    /// Chosen password.
    pub password: Zeroizing<String>,
    /// Repeated password.
    pub password_confirmation: Zeroizing<String>,
}

impl SignupRequest {
    /// Creates new signup request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            password_confirmation: Zeroizing::new(password_confirmation.into()),
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.as_str(), self.password.as_str())
    }

    #[must_use]
    pub fn passwords_match(&self) -> bool {
        *self.password == *self.password_confirmation
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Authenticated session.
    pub session: AuthSession,
}

/// Signup response data.
#[derive(Debug, Clone)]
pub struct SignupResponse {
    /// Session of the new account.
    pub session: AuthSession,
    /// Strength of the chosen password.
    pub password_strength: StrengthLevel,
}
