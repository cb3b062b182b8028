//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::domain::errors::{ClassifiedAuthError, handle_auth_error};
use crate::domain::ports::AuthPort;

/// Handles the email/password login workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns a validation classification for malformed input, otherwise the
    /// classification of the backend failure.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, ClassifiedAuthError> {
        let credentials = request.credentials();
        debug!(email = %credentials.email(), "Attempting login");

        if credentials.email().is_empty() || credentials.password().is_empty() {
            warn!("Login rejected: missing email or password");
            return Err(ClassifiedAuthError::validation());
        }

        if !credentials.has_valid_email() {
            warn!("Login rejected: malformed email");
            return Err(ClassifiedAuthError::validation());
        }

        let session = self.auth_port.sign_in(&credentials).await.map_err(|e| {
            let classified = handle_auth_error(&e);
            warn!(error = %e, kind = %classified.kind, "Login failed");
            classified
        })?;

        info!(user_id = %session.user_id(), "Successfully authenticated");

        Ok(LoginResponse { session })
    }

    /// Ends the current session.
    ///
    /// # Errors
    /// Returns the classification of the backend failure.
    pub async fn logout(&self) -> Result<(), ClassifiedAuthError> {
        debug!("Signing out");
        match self.auth_port.sign_out().await {
            Ok(()) => {
                info!("Signed out");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to sign out");
                Err(handle_auth_error(&e))
            }
        }
    }
}
