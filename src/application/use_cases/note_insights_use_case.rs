//! AI summarization and the counted regeneration flow.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::{NoteContent, NoteInsights, RegenerationQuota, UserId};
use crate::domain::errors::{GenerationError, UsageError};
use crate::domain::ports::{GenerationPort, UsagePort};
use crate::domain::services::{GateError, RegenerationGate};

/// Failure of a regeneration attempt.
#[derive(Debug, Error)]
pub enum RegenerationError {
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Generates note summaries and tags, and drives regenerations through the
/// confirmation gate.
#[derive(Clone)]
pub struct NoteInsightsUseCase {
    generation: Arc<dyn GenerationPort>,
    usage: Arc<dyn UsagePort>,
}

impl NoteInsightsUseCase {
    #[must_use]
    pub fn new(generation: Arc<dyn GenerationPort>, usage: Arc<dyn UsagePort>) -> Self {
        Self { generation, usage }
    }

    /// First-time summarization; not counted against the daily quota.
    ///
    /// # Errors
    /// Returns error for a blank note or a failed generation.
    pub async fn summarize(&self, note: &NoteContent) -> Result<NoteInsights, GenerationError> {
        if note.is_blank() {
            return Err(GenerationError::EmptyNote);
        }

        debug!(title = %note.title, "Requesting note insights");
        let insights = self.generation.summarize(note).await?.normalized();
        info!(tags = insights.tags.len(), "Note insights generated");

        Ok(insights)
    }

    /// Loads today's quota and opens the confirmation gate with it.
    ///
    /// # Errors
    /// Returns error if the quota cannot be loaded or the gate is busy.
    pub async fn prepare_regeneration(
        &self,
        user_id: &UserId,
        gate: &mut RegenerationGate,
    ) -> Result<RegenerationQuota, RegenerationError> {
        let quota = self.usage.regeneration_quota(user_id).await?;
        gate.open(quota)?;
        Ok(quota)
    }

    /// Confirms the open gate, counts the regeneration and generates new insights.
    ///
    /// The gate is settled whether or not the regeneration succeeds.
    ///
    /// # Errors
    /// Returns error if the gate is not idle, the limit is reached, or the
    /// generation fails.
    pub async fn confirm_regeneration(
        &self,
        user_id: &UserId,
        note: &NoteContent,
        gate: &mut RegenerationGate,
    ) -> Result<NoteInsights, RegenerationError> {
        gate.confirm()?;

        let outcome = self.regenerate(user_id, note).await;
        gate.settle()?;

        if let Err(e) = &outcome {
            warn!(user_id = %user_id, error = %e, "Regeneration failed");
        }
        outcome
    }

    async fn regenerate(
        &self,
        user_id: &UserId,
        note: &NoteContent,
    ) -> Result<NoteInsights, RegenerationError> {
        if note.is_blank() {
            return Err(GenerationError::EmptyNote.into());
        }

        let quota = self.usage.record_regeneration(user_id).await?;
        info!(
            user_id = %user_id,
            current = quota.current_count,
            limit = quota.limit,
            "Regeneration counted"
        );

        Ok(self.summarize(note).await?)
    }
}
