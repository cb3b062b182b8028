//! Maps raw authentication failures onto [`AuthErrorKind`].
//!
//! Matching is ordered and case-sensitive on message substrings, followed by
//! HTTP status ranges. It is coupled to the backend's exact wording: a
//! reworded backend message silently falls through to a later rule. The
//! table below is the single place where that coupling lives.

use super::auth_error::{AuthErrorKind, AuthFailure, ClassifiedAuthError};

/// Condition under which a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Message contains any of the substrings.
    MessageContains(&'static [&'static str]),
    /// Status is greater than or equal to the bound.
    StatusAtLeast(u16),
    /// Status lies in the half-open range.
    StatusWithin(u16, u16),
}

impl Trigger {
    fn matches(self, failure: &AuthFailure) -> bool {
        match self {
            Self::MessageContains(needles) => failure
                .message
                .as_deref()
                .is_some_and(|message| needles.iter().any(|needle| message.contains(needle))),
            Self::StatusAtLeast(bound) => failure.status.is_some_and(|status| status >= bound),
            Self::StatusWithin(low, high) => failure
                .status
                .is_some_and(|status| (low..high).contains(&status)),
        }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub trigger: Trigger,
    pub kind: AuthErrorKind,
}

/// Classification rules in precedence order; the first match wins.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        trigger: Trigger::MessageContains(&["Network", "fetch"]),
        kind: AuthErrorKind::NetworkError,
    },
    ClassificationRule {
        trigger: Trigger::MessageContains(&["Session", "expired"]),
        kind: AuthErrorKind::SessionExpired,
    },
    ClassificationRule {
        trigger: Trigger::MessageContains(&["Email not confirmed"]),
        kind: AuthErrorKind::EmailNotConfirmed,
    },
    ClassificationRule {
        trigger: Trigger::MessageContains(&["Invalid login credentials", "Invalid email"]),
        kind: AuthErrorKind::InvalidCredentials,
    },
    ClassificationRule {
        trigger: Trigger::MessageContains(&["Permission", "403"]),
        kind: AuthErrorKind::PermissionDenied,
    },
    ClassificationRule {
        trigger: Trigger::StatusAtLeast(500),
        kind: AuthErrorKind::ServerError,
    },
    ClassificationRule {
        trigger: Trigger::StatusWithin(400, 500),
        kind: AuthErrorKind::ClientError,
    },
];

/// Classifies a backend failure into a user-facing error.
///
/// Falls back to [`AuthErrorKind::UnknownError`], keeping the original
/// message when there is one.
#[must_use]
pub fn handle_auth_error(failure: &AuthFailure) -> ClassifiedAuthError {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.trigger.matches(failure))
        .map_or_else(
            || ClassifiedAuthError::unknown(failure.message.as_deref()),
            |rule| ClassifiedAuthError::from_kind(rule.kind),
        )
}

impl From<&AuthFailure> for ClassifiedAuthError {
    fn from(failure: &AuthFailure) -> Self {
        handle_auth_error(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SuggestedAction;
    use test_case::test_case;

    fn failure(message: Option<&str>, status: Option<u16>) -> AuthFailure {
        AuthFailure {
            message: message.map(str::to_string),
            status,
        }
    }

    #[test_case(Some("Network request failed"), None, AuthErrorKind::NetworkError ; "network")]
    #[test_case(Some("Failed to fetch"), None, AuthErrorKind::NetworkError ; "fetch")]
    #[test_case(Some("Session not found"), None, AuthErrorKind::SessionExpired ; "session")]
    #[test_case(Some("JWT expired"), None, AuthErrorKind::SessionExpired ; "expired")]
    #[test_case(Some("Email not confirmed"), Some(400), AuthErrorKind::EmailNotConfirmed ; "email_not_confirmed")]
    #[test_case(Some("Invalid login credentials"), Some(400), AuthErrorKind::InvalidCredentials ; "bad_credentials")]
    #[test_case(Some("Invalid email"), None, AuthErrorKind::InvalidCredentials ; "invalid_email")]
    #[test_case(Some("Permission denied"), None, AuthErrorKind::PermissionDenied ; "permission")]
    #[test_case(Some("HTTP 403"), None, AuthErrorKind::PermissionDenied ; "status_in_message")]
    #[test_case(None, Some(500), AuthErrorKind::ServerError ; "status_500")]
    #[test_case(None, Some(503), AuthErrorKind::ServerError ; "status_503")]
    #[test_case(None, Some(404), AuthErrorKind::ClientError ; "status_404")]
    #[test_case(None, Some(400), AuthErrorKind::ClientError ; "status_400")]
    #[test_case(None, Some(302), AuthErrorKind::UnknownError ; "redirect_status")]
    #[test_case(None, None, AuthErrorKind::UnknownError ; "empty")]
    fn test_classification(message: Option<&str>, status: Option<u16>, expected: AuthErrorKind) {
        assert_eq!(handle_auth_error(&failure(message, status)).kind, expected);
    }

    #[test]
    fn test_message_rules_take_precedence_over_status() {
        let result = handle_auth_error(&failure(Some("Network timeout"), Some(500)));
        assert_eq!(result.kind, AuthErrorKind::NetworkError);
    }

    #[test]
    fn test_earlier_message_rule_wins() {
        // Contains both "Session" and "Permission".
        let result = handle_auth_error(&failure(Some("Session lacks Permission"), None));
        assert_eq!(result.kind, AuthErrorKind::SessionExpired);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let result = handle_auth_error(&failure(Some("network down"), None));
        assert_eq!(result.kind, AuthErrorKind::UnknownError);
        assert_eq!(result.message, "network down");
    }

    #[test]
    fn test_fixed_message_ignores_input() {
        let a = handle_auth_error(&failure(Some("Network A"), None));
        let b = handle_auth_error(&failure(Some("Network B"), None));
        assert_eq!(a.message, b.message);
        assert_eq!(a.message, AuthErrorKind::NetworkError.message());
        assert_eq!(a.action, SuggestedAction::Retry);
    }

    #[test]
    fn test_actions_follow_kind() {
        assert_eq!(
            handle_auth_error(&failure(Some("Session expired"), None)).action,
            SuggestedAction::Login
        );
        assert_eq!(
            handle_auth_error(&failure(Some("Email not confirmed"), None)).action,
            SuggestedAction::ResendEmail
        );
        assert_eq!(
            handle_auth_error(&failure(Some("Permission denied"), None)).action,
            SuggestedAction::GoHome
        );
    }
}
