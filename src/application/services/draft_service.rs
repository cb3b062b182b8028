//! Per-user draft recovery on a key-value store.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::{NoteDraft, UserId, is_blank_draft};
use crate::domain::ports::KeyValueStore;

/// Prefix of the storage key holding a user's draft.
pub const DRAFT_KEY_PREFIX: &str = "note_draft_";

/// Returns the storage key for `user_id`'s draft.
#[must_use]
pub fn draft_key(user_id: &UserId) -> String {
    format!("{DRAFT_KEY_PREFIX}{user_id}")
}

/// Keeps at most one unsaved draft per user.
///
/// Storage failures never propagate: writes report `false` and reads report
/// no draft.
#[derive(Clone)]
pub struct DraftService {
    store: Arc<dyn KeyValueStore>,
}

impl DraftService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Saves the draft, replacing any previous one.
    ///
    /// Returns `false` without writing when both fields are blank, or when the
    /// store refuses the write.
    pub fn save_draft(&self, user_id: &UserId, title: &str, content: &str) -> bool {
        if is_blank_draft(title, content) {
            debug!(user_id = %user_id, "Skipping blank draft");
            return false;
        }

        let draft = NoteDraft::new(user_id.clone(), title, content, Utc::now());
        let json = match serde_json::to_string(&draft) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize draft");
                return false;
            }
        };

        match self.store.set(&draft_key(user_id), &json) {
            Ok(()) => {
                debug!(user_id = %user_id, "Draft saved");
                true
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to save draft");
                false
            }
        }
    }

    /// Loads the user's draft.
    ///
    /// A stored value that does not parse as a draft is deleted. A draft
    /// recorded for another user is ignored but left in place.
    #[must_use]
    pub fn get_draft(&self, user_id: &UserId) -> Option<NoteDraft> {
        let key = draft_key(user_id);

        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to read draft");
                return None;
            }
        };

        let draft = match serde_json::from_str::<NoteDraft>(&raw) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Discarding corrupted draft");
                if let Err(e) = self.store.remove(&key) {
                    warn!(user_id = %user_id, error = %e, "Failed to remove corrupted draft");
                }
                return None;
            }
        };

        if !draft.belongs_to(user_id) {
            warn!(
                user_id = %user_id,
                stored_user_id = %draft.user_id,
                "Ignoring draft recorded for another user"
            );
            return None;
        }

        Some(draft)
    }

    /// Deletes the user's draft after a discard or a successful submission.
    pub fn clear_draft(&self, user_id: &UserId) {
        match self.store.remove(&draft_key(user_id)) {
            Ok(()) => info!(user_id = %user_id, "Draft cleared"),
            Err(e) => warn!(user_id = %user_id, error = %e, "Failed to clear draft"),
        }
    }

    #[must_use]
    pub fn has_draft(&self, user_id: &UserId) -> bool {
        self.get_draft(user_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::DeniedKeyValueStore;
    use crate::infrastructure::storage::{FileKeyValueStore, MemoryKeyValueStore};
    use chrono::Duration;
    use tempfile::tempdir;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn service() -> (DraftService, Arc<MemoryKeyValueStore>) {
        let store = Arc::new(MemoryKeyValueStore::new());
        (DraftService::new(store.clone()), store)
    }

    #[test]
    fn test_blank_draft_is_not_saved() {
        let (service, store) = service();
        let u = user("u1");

        assert!(!service.save_draft(&u, "", ""));
        assert!(!service.save_draft(&u, "  ", "\n"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_get() {
        let (service, _) = service();
        let u = user("u1");

        assert!(service.save_draft(&u, "t", "c"));

        let draft = service.get_draft(&u).unwrap();
        assert_eq!(draft.title, "t");
        assert_eq!(draft.content, "c");
        assert_eq!(draft.user_id, u);
        assert!(Utc::now() - draft.saved_at < Duration::seconds(5));
        assert!(service.has_draft(&u));
    }

    #[test]
    fn test_save_overwrites_single_slot() {
        let (service, store) = service();
        let u = user("u1");

        service.save_draft(&u, "first", "");
        service.save_draft(&u, "", "second");

        assert_eq!(store.len(), 1);
        let draft = service.get_draft(&u).unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.content, "second");
    }

    #[test]
    fn test_drafts_are_isolated_per_user() {
        let (service, _) = service();
        service.save_draft(&user("a"), "A", "");

        assert!(service.get_draft(&user("b")).is_none());
        assert!(service.has_draft(&user("a")));
    }

    #[test]
    fn test_corrupted_draft_is_removed() {
        let (service, store) = service();
        let u = user("u1");
        store.set(&draft_key(&u), "{not json").unwrap();

        assert!(service.get_draft(&u).is_none());
        assert_eq!(store.get(&draft_key(&u)).unwrap(), None);
    }

    #[test]
    fn test_wrong_shape_is_removed() {
        let (service, store) = service();
        let u = user("u1");
        store
            .set(
                &draft_key(&u),
                r#"{"title":["x"],"content":"c","savedAt":"2024-01-01T00:00:00Z","userId":"u1"}"#,
            )
            .unwrap();

        assert!(service.get_draft(&u).is_none());
        assert!(!store.contains(&draft_key(&u)).unwrap());
    }

    #[test]
    fn test_foreign_draft_is_ignored_but_kept() {
        let (service, store) = service();
        let u = user("u1");
        let foreign = r#"{"title":"t","content":"c","savedAt":"2024-01-01T00:00:00Z","userId":"u2"}"#;
        store.set(&draft_key(&u), foreign).unwrap();

        assert!(service.get_draft(&u).is_none());
        assert_eq!(store.get(&draft_key(&u)).unwrap().as_deref(), Some(foreign));
    }

    #[test]
    fn test_clear_draft() {
        let (service, _) = service();
        let u = user("u1");
        service.save_draft(&u, "t", "c");

        service.clear_draft(&u);

        assert!(!service.has_draft(&u));
    }

    #[test]
    fn test_quota_failure_reports_false() {
        let store = Arc::new(MemoryKeyValueStore::with_quota(16));
        let service = DraftService::new(store.clone());

        assert!(!service.save_draft(&user("u1"), "a long title", "and content"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_denied_store_degrades_to_no_draft() {
        let service = DraftService::new(Arc::new(DeniedKeyValueStore));
        let u = user("u1");

        assert!(!service.save_draft(&u, "t", "c"));
        assert!(service.get_draft(&u).is_none());
        assert!(!service.has_draft(&u));
        service.clear_draft(&u);
    }

    #[test]
    fn test_undecodable_draft_file_is_removed() {
        let dir = tempdir().unwrap();
        let store = Arc::new(FileKeyValueStore::open(dir.path()).unwrap());
        let path = store.entry_path(&draft_key(&user("u1")));
        std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();
        let drafts = DraftService::new(store);

        assert!(drafts.get_draft(&user("u1")).is_none());
        assert!(!path.exists());
    }
}
