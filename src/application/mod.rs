//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Draft persistence and display formatting.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
pub use services::DraftService;
pub use use_cases::{LoginUseCase, NoteInsightsUseCase, SignupUseCase};
