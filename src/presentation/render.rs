//! Plain-text rendering of command results.

use chrono::{DateTime, Utc};

use crate::application::services::{format_date_at, truncate_text};
use crate::domain::entities::{
    MAX_STRENGTH_SCORE, NoteDraft, NoteInsights, RegenerationQuota, StrengthLevel,
};
use crate::domain::errors::ClassifiedAuthError;

const DRAFT_PREVIEW_LEN: usize = 80;

#[must_use]
pub fn email_check(email: &str, valid: bool) -> String {
    if valid {
        format!("{email}: valid")
    } else {
        format!("{email}: invalid")
    }
}

#[must_use]
pub fn password_strength(score: u8, level: StrengthLevel) -> String {
    format!(
        "Strength: {score}/{MAX_STRENGTH_SCORE} {} ({})",
        level.label(),
        level.color()
    )
}

#[must_use]
pub fn classified_error(error: &ClassifiedAuthError) -> String {
    format!(
        "{}\n{}\nSuggested action: {} [{}]",
        error.kind.as_str(),
        error.message,
        error.action.label(),
        error.action.as_str()
    )
}

/// Draft summary with a relative save time.
#[must_use]
pub fn draft(draft: &NoteDraft, now: DateTime<Utc>) -> String {
    let title = if draft.title.trim().is_empty() {
        "(untitled)"
    } else {
        draft.title.as_str()
    };
    format!(
        "{title}\nSaved {}\n\n{}",
        format_date_at(draft.saved_at, now),
        truncate_text(&draft.content, DRAFT_PREVIEW_LEN)
    )
}

#[must_use]
pub fn insights(insights: &NoteInsights) -> String {
    let mut out = insights.summary.clone();
    if !insights.tags.is_empty() {
        let tags: Vec<String> = insights.tags.iter().map(|t| format!("#{t}")).collect();
        out.push_str("\n\n");
        out.push_str(&tags.join(" "));
    }
    out
}

/// Confirmation question shown before a counted regeneration.
#[must_use]
pub fn regeneration_prompt(quota: RegenerationQuota) -> String {
    match quota.remaining_display() {
        Some(1) => "Regenerate insights? 1 regeneration left today.".to_string(),
        Some(n) => format!("Regenerate insights? {n} regenerations left today."),
        None => "Regenerate insights? No regenerations left today.".to_string(),
    }
}

#[must_use]
pub fn usage(quota: RegenerationQuota) -> String {
    format!(
        "Used {} of {} regenerations today ({} left)",
        quota.current_count,
        quota.limit,
        quota.remaining_display().unwrap_or(0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserId;
    use crate::domain::errors::AuthErrorKind;
    use chrono::Duration;
    use test_case::test_case;

    #[test_case(RegenerationQuota::new(0, 3), "Regenerate insights? 3 regenerations left today." ; "several left")]
    #[test_case(RegenerationQuota::new(2, 3), "Regenerate insights? 1 regeneration left today." ; "one left")]
    #[test_case(RegenerationQuota::new(3, 3), "Regenerate insights? No regenerations left today." ; "exhausted")]
    #[test_case(RegenerationQuota::new(5, 3), "Regenerate insights? No regenerations left today." ; "over limit")]
    fn test_regeneration_prompt(quota: RegenerationQuota, expected: &str) {
        assert_eq!(regeneration_prompt(quota), expected);
    }

    #[test]
    fn test_usage_never_shows_negative() {
        assert_eq!(
            usage(RegenerationQuota::new(4, 3)),
            "Used 4 of 3 regenerations today (0 left)"
        );
    }

    #[test]
    fn test_classified_error_lists_action() {
        let error = ClassifiedAuthError::from_kind(AuthErrorKind::EmailNotConfirmed);
        let text = classified_error(&error);

        assert!(text.starts_with("EMAIL_NOT_CONFIRMED\n"));
        assert!(text.ends_with("[resend-email]"));
    }

    #[test]
    fn test_draft_uses_relative_time_and_preview() {
        let now = Utc::now();
        let user = UserId::new("u1").unwrap();
        let content = "x".repeat(100);
        let saved = NoteDraft::new(user, "", content, now - Duration::minutes(5));

        let text = draft(&saved, now);

        assert!(text.starts_with("(untitled)\nSaved 5 minutes ago"));
        assert!(text.ends_with(&format!("{}...", "x".repeat(80))));
    }

    #[test]
    fn test_insights_prefixes_tags() {
        let rendered = insights(&NoteInsights::new(
            "Weekly shopping list",
            vec!["groceries".to_string(), "home".to_string()],
        ));
        assert_eq!(rendered, "Weekly shopping list\n\n#groceries #home");
    }

    #[test]
    fn test_password_strength_line() {
        assert_eq!(
            password_strength(5, StrengthLevel::Strong),
            "Strength: 5/5 Strong (green)"
        );
    }
}
