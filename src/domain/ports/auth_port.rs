//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthSession, Credentials};
use crate::domain::errors::AuthFailure;

/// Port for the managed authentication backend.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Signs in with email and password.
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthFailure>;

    /// Registers a new account.
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSession, AuthFailure>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<(), AuthFailure>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::entities::UserId;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock authentication port for testing.
    pub struct MockAuthPort {
        failure: Option<AuthFailure>,
        calls: Arc<RwLock<Vec<String>>>,
    }

    impl MockAuthPort {
        /// Creates mock that accepts every request.
        pub fn succeeding() -> Self {
            Self {
                failure: None,
                calls: Arc::new(RwLock::new(Vec::new())),
            }
        }

        /// Creates mock that fails every request with `failure`.
        pub fn failing(failure: AuthFailure) -> Self {
            Self {
                failure: Some(failure),
                calls: Arc::new(RwLock::new(Vec::new())),
            }
        }

        /// Emails the backend was called with.
        pub async fn calls(&self) -> Vec<String> {
            self.calls.read().await.clone()
        }

        async fn respond(&self, credentials: &Credentials) -> Result<AuthSession, AuthFailure> {
            self.calls.write().await.push(credentials.email().to_string());
            match &self.failure {
                Some(failure) => Err(failure.clone()),
                None => Ok(AuthSession::new(
                    UserId::new("user-1").unwrap(),
                    credentials.email(),
                    "access-token",
                )),
            }
        }
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthFailure> {
            self.respond(credentials).await
        }

        async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSession, AuthFailure> {
            self.respond(credentials).await
        }

        async fn sign_out(&self) -> Result<(), AuthFailure> {
            self.failure.clone().map_or(Ok(()), Err)
        }
    }
}
