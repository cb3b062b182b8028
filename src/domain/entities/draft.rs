//! Locally persisted note drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Unsaved note content kept for recovery after an interruption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl NoteDraft {
    #[must_use]
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        saved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            saved_at,
            user_id,
        }
    }

    /// Returns whether both title and content are blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        is_blank_draft(&self.title, &self.content)
    }

    #[must_use]
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// Returns whether a title/content pair carries nothing worth saving.
#[must_use]
pub fn is_blank_draft(title: &str, content: &str) -> bool {
    title.trim().is_empty() && content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape_uses_camel_case() {
        let draft = NoteDraft::new(UserId::new("u1").unwrap(), "t", "c", Utc::now());
        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(value["title"], "t");
        assert_eq!(value["content"], "c");
        assert_eq!(value["userId"], "u1");
        assert!(value["savedAt"].is_string());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let json = r#"{"title":1,"content":"c","savedAt":"2024-01-01T00:00:00Z","userId":"u1"}"#;
        assert!(serde_json::from_str::<NoteDraft>(json).is_err());
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank_draft("", ""));
        assert!(is_blank_draft("  ", "\n\t"));
        assert!(!is_blank_draft("t", ""));
        assert!(!is_blank_draft("", "c"));
    }
}
