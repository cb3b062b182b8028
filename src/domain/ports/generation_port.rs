//! Generative AI port definition.

use async_trait::async_trait;

use crate::domain::entities::{NoteContent, NoteInsights};
use crate::domain::errors::GenerationError;

/// Port for the hosted generative AI service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Produces a summary and tags for a note.
    async fn summarize(&self, note: &NoteContent) -> Result<NoteInsights, GenerationError>;
}
