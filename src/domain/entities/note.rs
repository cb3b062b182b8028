//! Note content sent for AI summarization and the insights returned.

use serde::{Deserialize, Serialize};

/// Title and body of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteContent {
    pub title: String,
    pub content: String,
}

impl NoteContent {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        super::draft::is_blank_draft(&self.title, &self.content)
    }
}

/// AI-generated summary and tags for a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInsights {
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NoteInsights {
    #[must_use]
    pub fn new(summary: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            tags,
        }
    }

    /// Trims tags, drops empty ones and removes duplicates keeping first occurrence.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let mut seen: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.drain(..) {
            let tag = tag.trim().trim_start_matches('#').trim().to_string();
            if !tag.is_empty() && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        self.tags = seen;
        self.summary = self.summary.trim().to_string();
        self
    }
}
