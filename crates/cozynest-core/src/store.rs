//! Wire types and the store trait for the remote diary service.
//!
//! Everything crossing the network boundary is deserialized into these tagged
//! shapes at the edge. A response that does not fit is a
//! [`CoreError::UnexpectedResponse`](crate::CoreError::UnexpectedResponse),
//! never a value trusted as-is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether an authentication attempt is a login or a first-time registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn verb(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
        }
    }
}

/// Store verdict on a login or registration attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One journal record, owned by exactly one user.
///
/// The backing store is document-shaped and spells the id as `_id`; both
/// spellings are accepted and missing fields default to empty so a sparse
/// document cannot fail the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
}

/// Acknowledgement for add/delete mutations. Extra payload (the stored entry)
/// is ignored; the list is refetched rather than patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationAck {
    pub success: bool,
}

/// One mood check-in, from the secondary mood/message store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// One free-text message left on the shared message board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedMessage {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
}

/// Remote persistence for diary sessions and entries.
///
/// Object-safe so the session can run against the HTTP client in production
/// and a scripted in-memory store in tests.
#[async_trait]
pub trait DiaryStore: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome, CoreError>;

    async fn register(&self, username: &str, password: &str) -> Result<AuthOutcome, CoreError>;

    /// Full entry list for one user, in the store's retrieval order.
    async fn entries(&self, user_id: &str) -> Result<Vec<DiaryEntry>, CoreError>;

    async fn add_entry(
        &self,
        user_id: &str,
        title: &str,
        content: &str,
    ) -> Result<MutationAck, CoreError>;

    async fn delete_entry(&self, entry_id: &str) -> Result<MutationAck, CoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_outcome_accepts_missing_optionals() {
        let outcome: AuthOutcome = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!outcome.success);
        assert!(outcome.user_id.is_none());
        assert!(outcome.message.is_none());

        let outcome: AuthOutcome =
            serde_json::from_str(r#"{"success":true,"userId":"u1"}"#).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn diary_entry_accepts_document_id_spelling() {
        let entry: DiaryEntry = serde_json::from_str(
            r#"{"_id":"e1","userId":"u1","title":"t","content":"hi","date":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(entry.id, "e1");
        assert_eq!(entry.user_id, "u1");

        // Sparse documents still deserialize
        let entry: DiaryEntry = serde_json::from_str(r#"{"id":"e2"}"#).unwrap();
        assert_eq!(entry.id, "e2");
        assert!(entry.content.is_empty());
    }

    #[test]
    fn mutation_ack_ignores_entry_payload() {
        let ack: MutationAck =
            serde_json::from_str(r#"{"success":true,"entry":{"id":"e3"}}"#).unwrap();
        assert!(ack.success);
    }
}
