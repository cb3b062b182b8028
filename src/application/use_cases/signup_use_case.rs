//! Signup use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{SignupRequest, SignupResponse};
use crate::domain::entities::{calculate_password_strength, get_password_strength_level};
use crate::domain::errors::{ClassifiedAuthError, handle_auth_error};
use crate::domain::ports::AuthPort;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Handles account registration.
#[derive(Clone)]
pub struct SignupUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl SignupUseCase {
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Validates the request locally, then registers the account.
    ///
    /// # Errors
    /// Returns a validation classification for malformed input, otherwise the
    /// classification of the backend failure.
    pub async fn execute(
        &self,
        request: SignupRequest,
    ) -> Result<SignupResponse, ClassifiedAuthError> {
        let credentials = request.credentials();
        debug!(email = %credentials.email(), "Attempting signup");

        if !credentials.has_valid_email() {
            warn!("Signup rejected: malformed email");
            return Err(ClassifiedAuthError::validation());
        }

        if credentials.password().chars().count() < MIN_PASSWORD_LENGTH {
            warn!("Signup rejected: password too short");
            return Err(ClassifiedAuthError::validation());
        }

        if !request.passwords_match() {
            warn!("Signup rejected: password confirmation mismatch");
            return Err(ClassifiedAuthError::validation());
        }

        let password_strength =
            get_password_strength_level(calculate_password_strength(credentials.password()));

        let session = self.auth_port.sign_up(&credentials).await.map_err(|e| {
            let classified = handle_auth_error(&e);
            warn!(error = %e, kind = %classified.kind, "Signup failed");
            classified
        })?;

        info!(
            user_id = %session.user_id(),
            strength = %password_strength,
            "Account created"
        );

        Ok(SignupResponse {
            session,
            password_strength,
        })
    }
}
