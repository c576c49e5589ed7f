//! Diary session lifecycle: authentication, entry cache, pagination.
//!
//! One [`DiarySession`] owns the authenticated identity and the cached entry
//! list for the diary view. Every mutation goes through the [`DiaryStore`];
//! the cache is only ever replaced wholesale from a fresh load, never patched
//! locally, so the display can never diverge from the store.
//!
//! Mutating operations take `&mut self` across the whole call-then-reload
//! sequence. Callers that share the session behind a lock therefore get the
//! ordering guarantee for free: a reload is issued only after the mutation
//! response it follows, and cannot be reordered ahead of it.

use std::sync::Arc;

use chrono::Local;

use crate::error::CoreError;
use crate::slot::SessionSlot;
use crate::store::{AuthMode, DiaryEntry, DiaryStore};

/// Authentication state and entry cache for the diary feature.
pub struct DiarySession {
    store: Arc<dyn DiaryStore>,
    slot: Arc<dyn SessionSlot>,
    user_id: Option<String>,
    entries: Vec<DiaryEntry>,
    current_page: usize,
    epoch: u64,
}

impl DiarySession {
    /// Create an unauthenticated session over the given store and slot.
    pub fn new(store: Arc<dyn DiaryStore>, slot: Arc<dyn SessionSlot>) -> Self {
        Self {
            store,
            slot,
            user_id: None,
            entries: Vec::new(),
            current_page: 0,
            epoch: 0,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Derived, never stored separately: authenticated means a user id is set.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Cached entry list, in the store's retrieval order.
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The entry the pager currently points at.
    pub fn current_entry(&self) -> Option<&DiaryEntry> {
        self.entries.get(self.current_page)
    }

    /// Generation counter, bumped whenever the session identity is torn down
    /// or replaced. A task that captured an older epoch must discard its
    /// result instead of applying it to the new session.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Re-open the session persisted by a previous run, if any.
    ///
    /// Returns whether an identifier was found. The persisted id is only a
    /// hint: entries are always fetched fresh, and a failed fetch leaves an
    /// empty list, not stale data.
    pub async fn restore(&mut self) -> Result<bool, CoreError> {
        let Some(user_id) = self.slot.load()? else {
            tracing::debug!("no persisted diary session");
            return Ok(false);
        };
        tracing::info!(user_id = %user_id, "restoring persisted diary session");
        self.epoch += 1;
        self.user_id = Some(user_id);
        if let Err(e) = self.load_entries().await {
            tracing::warn!("entry load after restore failed: {e}");
        }
        Ok(true)
    }

    /// Log in or register against the store.
    ///
    /// On success the identifier is adopted, persisted to the slot, and the
    /// entry list is loaded. On a store rejection or transport failure the
    /// session stays unauthenticated and the error carries a user-facing
    /// message.
    pub async fn authenticate(
        &mut self,
        username: &str,
        password: &str,
        mode: AuthMode,
    ) -> Result<(), CoreError> {
        let outcome = match mode {
            AuthMode::Login => self.store.login(username, password).await?,
            AuthMode::Register => self.store.register(username, password).await?,
        };

        if !outcome.success {
            let message = outcome
                .message
                .unwrap_or_else(|| format!("{} rejected by the diary store", mode.verb()));
            tracing::warn!(mode = mode.verb(), "authentication failed: {message}");
            return Err(CoreError::Auth(message));
        }

        let user_id = outcome.user_id.ok_or_else(|| {
            CoreError::UnexpectedResponse("successful auth without a userId".into())
        })?;

        // A slot write failure should not block the login itself
        if let Err(e) = self.slot.save(&user_id) {
            tracing::warn!("failed to persist session identifier: {e}");
        }

        tracing::info!(mode = mode.verb(), user_id = %user_id, "diary session opened");
        self.user_id = Some(user_id);
        if let Err(e) = self.load_entries().await {
            tracing::warn!("entry load after authentication failed: {e}");
        }
        Ok(())
    }

    /// Replace the entry cache with a fresh list from the store.
    ///
    /// On success the pager lands on the last index (the newest entry, given
    /// the store appends). On failure the cache is emptied - fail-safe to
    /// empty, never to stale data - and the error is returned for logging.
    pub async fn load_entries(&mut self) -> Result<(), CoreError> {
        let Some(user_id) = self.user_id.clone() else {
            return Ok(());
        };
        match self.store.entries(&user_id).await {
            Ok(list) => {
                tracing::debug!(count = list.len(), "diary entries loaded");
                self.entries = list;
                self.current_page = self.entries.len().saturating_sub(1);
                Ok(())
            }
            Err(e) => {
                self.entries.clear();
                self.current_page = 0;
                Err(e)
            }
        }
    }

    /// Submit a new entry titled with today's date, then resynchronize.
    ///
    /// Returns `Ok(false)` without touching the store when the session is
    /// unauthenticated, the content trims to empty, or the store declines.
    pub async fn add_entry(&mut self, content: &str) -> Result<bool, CoreError> {
        let Some(user_id) = self.user_id.clone() else {
            return Ok(false);
        };
        let content = content.trim();
        if content.is_empty() {
            return Ok(false);
        }

        let ack = self
            .store
            .add_entry(&user_id, &today_title(), content)
            .await?;
        if !ack.success {
            tracing::warn!("diary store declined new entry");
            return Ok(false);
        }

        // Authoritative refresh; the ack's payload is never inserted locally
        if let Err(e) = self.load_entries().await {
            tracing::warn!("entry reload after add failed: {e}");
        }
        Ok(true)
    }

    /// Permanently delete an entry, then resynchronize. No confirmation step.
    pub async fn delete_entry(&mut self, entry_id: &str) -> Result<bool, CoreError> {
        if self.user_id.is_none() || entry_id.is_empty() {
            return Ok(false);
        }

        let ack = self.store.delete_entry(entry_id).await?;
        if !ack.success {
            tracing::warn!(entry_id, "diary store declined delete");
            return Ok(false);
        }

        if let Err(e) = self.load_entries().await {
            tracing::warn!("entry reload after delete failed: {e}");
        }
        Ok(true)
    }

    /// Close the diary: drop the identity and the persisted identifier.
    ///
    /// The in-memory entry cache is left as-is; views stop rendering it once
    /// the session reads as unauthenticated.
    pub fn logout(&mut self) {
        if let Err(e) = self.slot.clear() {
            tracing::warn!("failed to clear persisted session: {e}");
        }
        self.user_id = None;
        self.epoch += 1;
        tracing::info!("diary session closed");
    }

    /// Step the pager forward. Clamped, no wraparound.
    pub fn next_page(&mut self) {
        if self.current_page + 1 < self.entries.len() {
            self.current_page += 1;
        }
    }

    /// Step the pager back. Clamped, no wraparound.
    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }
}

/// Entry titles are always the submission date, long-form and localized.
fn today_title() -> String {
    Local::now().format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;
    use crate::store::{AuthOutcome, MutationAck};
    use async_trait::async_trait;

    /// Store that answers every call with fixed data. Lifecycle scenarios with
    /// scripted stores live in `tests/session_lifecycle.rs`.
    struct FixedStore {
        entries: Vec<DiaryEntry>,
    }

    #[async_trait]
    impl DiaryStore for FixedStore {
        async fn login(&self, _: &str, _: &str) -> Result<AuthOutcome, CoreError> {
            Ok(AuthOutcome {
                success: true,
                user_id: Some("u1".into()),
                message: None,
            })
        }

        async fn register(&self, username: &str, password: &str) -> Result<AuthOutcome, CoreError> {
            self.login(username, password).await
        }

        async fn entries(&self, _: &str) -> Result<Vec<DiaryEntry>, CoreError> {
            Ok(self.entries.clone())
        }

        async fn add_entry(&self, _: &str, _: &str, _: &str) -> Result<MutationAck, CoreError> {
            Ok(MutationAck { success: true })
        }

        async fn delete_entry(&self, _: &str) -> Result<MutationAck, CoreError> {
            Ok(MutationAck { success: true })
        }
    }

    fn entry(id: &str) -> DiaryEntry {
        DiaryEntry {
            id: id.into(),
            user_id: "u1".into(),
            title: "t".into(),
            content: "hi".into(),
            date: "2024-01-01".into(),
        }
    }

    fn session_with(entries: Vec<DiaryEntry>) -> DiarySession {
        DiarySession::new(
            Arc::new(FixedStore { entries }),
            Arc::new(MemorySlot::new()),
        )
    }

    #[tokio::test]
    async fn authentication_is_derived_from_user_id() {
        let mut session = session_with(vec![]);
        assert_eq!(session.is_authenticated(), session.user_id().is_some());

        session
            .authenticate("alice", "pw", AuthMode::Login)
            .await
            .unwrap();
        assert_eq!(session.is_authenticated(), session.user_id().is_some());
        assert!(session.is_authenticated());

        session.logout();
        assert_eq!(session.is_authenticated(), session.user_id().is_some());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn pager_clamps_at_both_ends() {
        let mut session = session_with(vec![entry("a"), entry("b"), entry("c")]);
        session
            .authenticate("alice", "pw", AuthMode::Login)
            .await
            .unwrap();

        // A fresh load lands on the newest entry
        assert_eq!(session.current_page(), 2);
        session.next_page();
        assert_eq!(session.current_page(), 2);

        session.prev_page();
        session.prev_page();
        assert_eq!(session.current_page(), 0);
        session.prev_page();
        assert_eq!(session.current_page(), 0);

        assert_eq!(session.current_entry().unwrap().id, "a");
    }

    #[tokio::test]
    async fn empty_content_is_rejected_locally() {
        let mut session = session_with(vec![]);
        session
            .authenticate("alice", "pw", AuthMode::Login)
            .await
            .unwrap();

        assert!(!session.add_entry("   \n  ").await.unwrap());
        assert!(session.add_entry("dear diary").await.unwrap());
    }

    #[test]
    fn today_title_is_long_form() {
        let title = today_title();
        // "Saturday, August 30, 2026" - weekday and year present, no zero-pad
        assert!(title.contains(", 2") || title.contains(", 1"));
        assert!(title.contains(','));
    }
}
