//! Domain layer with core entities, errors, services and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Domain services.
pub mod services;

pub use entities::{
    AuthSession, Credentials, NoteContent, NoteDraft, NoteInsights, RegenerationQuota,
    StrengthLevel, UserId,
};
pub use errors::{AuthErrorKind, AuthFailure, ClassifiedAuthError, SuggestedAction};
pub use ports::{AuthPort, GenerationPort, KeyValueStore, UsagePort};
pub use services::RegenerationGate;
