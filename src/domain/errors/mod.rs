//! Domain error types.

mod auth_error;
mod classifier;
mod generation_error;
mod storage_error;
mod usage_error;

pub use auth_error::{
    AuthErrorKind, AuthFailure, ClassifiedAuthError, ErrorAction, SuggestedAction,
    get_error_action,
};
pub use classifier::{CLASSIFICATION_RULES, ClassificationRule, Trigger, handle_auth_error};
pub use generation_error::GenerationError;
pub use storage_error::StorageError;
pub use usage_error::UsageError;
