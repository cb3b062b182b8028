//! Domain entity definitions.

mod credentials;
mod draft;
mod note;
mod password;
mod quota;
mod user;

pub use credentials::{Credentials, is_valid_email};
pub use draft::{NoteDraft, is_blank_draft};
pub use note::{NoteContent, NoteInsights};
pub use password::{
    CharClasses, MAX_STRENGTH_SCORE, StrengthLevel, calculate_password_strength,
    get_password_strength_level,
};
pub use quota::RegenerationQuota;
pub use user::{AuthSession, UserId};
