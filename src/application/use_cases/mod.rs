//! Use case implementations.

mod login_use_case;
mod note_insights_use_case;
mod signup_use_case;

pub use login_use_case::LoginUseCase;
pub use note_insights_use_case::{NoteInsightsUseCase, RegenerationError};
pub use signup_use_case::{MIN_PASSWORD_LENGTH, SignupUseCase};
