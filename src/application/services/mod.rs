//! Draft persistence and display formatting.

pub mod draft_service;
pub mod formatting;

pub use draft_service::{DRAFT_KEY_PREFIX, DraftService, draft_key};
pub use formatting::{
    ELLIPSIS, format_date, format_date_at, format_date_str, parse_timestamp, truncate_text,
};
