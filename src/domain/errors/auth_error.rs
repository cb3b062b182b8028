//! Authentication error taxonomy.

use thiserror::Error;

const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Loosely-typed failure reported by the authentication backend.
///
/// Only `message` and `status` are read; neither is guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("authentication failed"))]
pub struct AuthFailure {
    pub message: Option<String>,
    pub status: Option<u16>,
}

impl AuthFailure {
    /// Creates failure carrying only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
        }
    }

    /// Creates failure carrying only an HTTP status.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self {
            message: None,
            status: Some(status),
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Classification of an authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    NetworkError,
    ServerError,
    ClientError,
    ValidationError,
    SessionExpired,
    PermissionDenied,
    EmailNotConfirmed,
    InvalidCredentials,
    UnknownError,
}

impl AuthErrorKind {
    /// Stable identifier, e.g. `NETWORK_ERROR`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::ServerError => "SERVER_ERROR",
            Self::ClientError => "CLIENT_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::EmailNotConfirmed => "EMAIL_NOT_CONFIRMED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Fixed user-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NetworkError => {
                "Could not reach the server. Check your connection and try again."
            }
            Self::ServerError => "The server ran into a problem. Please try again later.",
            Self::ClientError => {
                "The request could not be processed. Please check your input and try again."
            }
            Self::ValidationError => "Please check the entered values and try again.",
            Self::SessionExpired => "Your session has expired. Please log in again.",
            Self::PermissionDenied => "You do not have permission to perform this action.",
            Self::EmailNotConfirmed => {
                "Your email address has not been confirmed yet. Check your inbox for the confirmation link."
            }
            Self::InvalidCredentials => "The email address or password is incorrect.",
            Self::UnknownError => GENERIC_ERROR_MESSAGE,
        }
    }

    /// Suggested remedial action.
    #[must_use]
    pub const fn action(self) -> SuggestedAction {
        match self {
            Self::SessionExpired => SuggestedAction::Login,
            Self::EmailNotConfirmed => SuggestedAction::ResendEmail,
            Self::PermissionDenied => SuggestedAction::GoHome,
            Self::NetworkError
            | Self::ServerError
            | Self::ClientError
            | Self::ValidationError
            | Self::InvalidCredentials
            | Self::UnknownError => SuggestedAction::Retry,
        }
    }
}

impl std::fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user is invited to do after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestedAction {
    Retry,
    Login,
    ResendEmail,
    GoHome,
}

impl SuggestedAction {
    /// Action tag, e.g. `resend-email`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::Login => "login",
            Self::ResendEmail => "resend-email",
            Self::GoHome => "go-home",
        }
    }

    /// Button label for the action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retry => "Try again",
            Self::Login => "Log in",
            Self::ResendEmail => "Resend confirmation email",
            Self::GoHome => "Back to home",
        }
    }
}

impl std::fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and action pair for a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorAction {
    pub label: &'static str,
    pub action: SuggestedAction,
}

/// Returns the action button for a classification.
#[must_use]
pub const fn get_error_action(kind: AuthErrorKind) -> ErrorAction {
    let action = kind.action();
    ErrorAction {
        label: action.label(),
        action,
    }
}

/// Classified failure ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassifiedAuthError {
    pub kind: AuthErrorKind,
    pub message: String,
    pub action: SuggestedAction,
}

impl ClassifiedAuthError {
    /// Creates classification with the kind's fixed message.
    #[must_use]
    pub fn from_kind(kind: AuthErrorKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            action: kind.action(),
        }
    }

    /// Creates an unknown-error classification, keeping the original message when present.
    #[must_use]
    pub fn unknown(original: Option<&str>) -> Self {
        let message = original
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE);
        Self {
            kind: AuthErrorKind::UnknownError,
            message: message.to_string(),
            action: SuggestedAction::Retry,
        }
    }

    /// Creates validation classification.
    #[must_use]
    pub fn validation() -> Self {
        Self::from_kind(AuthErrorKind::ValidationError)
    }

    /// Returns whether retrying the same request may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self.kind,
            AuthErrorKind::NetworkError | AuthErrorKind::ServerError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_action_lookup() {
        let action = get_error_action(AuthErrorKind::EmailNotConfirmed);
        assert_eq!(action.action, SuggestedAction::ResendEmail);
        assert_eq!(action.label, "Resend confirmation email");

        assert_eq!(
            get_error_action(AuthErrorKind::PermissionDenied).action,
            SuggestedAction::GoHome
        );
        assert_eq!(
            get_error_action(AuthErrorKind::SessionExpired).action,
            SuggestedAction::Login
        );
        assert_eq!(
            get_error_action(AuthErrorKind::ServerError).action,
            SuggestedAction::Retry
        );
    }

    #[test]
    fn test_unknown_falls_back_to_generic_message() {
        assert_eq!(ClassifiedAuthError::unknown(None).message, GENERIC_ERROR_MESSAGE);
        assert_eq!(ClassifiedAuthError::unknown(Some("  ")).message, GENERIC_ERROR_MESSAGE);
        assert_eq!(ClassifiedAuthError::unknown(Some("boom")).message, "boom");
    }

    #[test]
    fn test_auth_failure_display() {
        assert_eq!(AuthFailure::message("bad").to_string(), "bad");
        assert_eq!(AuthFailure::status(500).to_string(), "authentication failed");
    }

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(AuthErrorKind::EmailNotConfirmed.as_str(), "EMAIL_NOT_CONFIRMED");
        assert_eq!(SuggestedAction::GoHome.to_string(), "go-home");
    }
}
