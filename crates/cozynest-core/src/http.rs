//! reqwest-backed clients for the remote diary and mood/message stores.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::CoreError;
use crate::store::{AuthOutcome, DiaryEntry, DiaryStore, MoodEntry, MutationAck, SharedMessage};

/// HTTP client for the diary store endpoints under `/api/diary`.
#[derive(Debug, Clone)]
pub struct HttpDiaryStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDiaryStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn auth_call(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, CoreError> {
        let response = self
            .client
            .post(self.url(path))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        tracing::debug!(path, status = %response.status(), "diary auth call");
        Ok(response.json().await?)
    }
}

#[async_trait]
impl DiaryStore for HttpDiaryStore {
    async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome, CoreError> {
        self.auth_call("/api/diary/login", username, password).await
    }

    async fn register(&self, username: &str, password: &str) -> Result<AuthOutcome, CoreError> {
        self.auth_call("/api/diary/register", username, password)
            .await
    }

    async fn entries(&self, user_id: &str) -> Result<Vec<DiaryEntry>, CoreError> {
        let value: Value = self
            .client
            .get(self.url(&format!("/api/diary/entries/{user_id}")))
            .send()
            .await?
            .json()
            .await?;

        // Validate the shape at the boundary: anything but an array is
        // malformed and handled by the caller, never rendered.
        if !value.is_array() {
            return Err(CoreError::UnexpectedResponse(format!(
                "expected entry array, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    async fn add_entry(
        &self,
        user_id: &str,
        title: &str,
        content: &str,
    ) -> Result<MutationAck, CoreError> {
        let response = self
            .client
            .post(self.url("/api/diary/entries"))
            .json(&json!({ "userId": user_id, "title": title, "content": content }))
            .send()
            .await?;
        Ok(response.json().await?)
    }

    async fn delete_entry(&self, entry_id: &str) -> Result<MutationAck, CoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/diary/entries/{entry_id}")))
            .send()
            .await?;
        Ok(response.json().await?)
    }
}

/// HTTP client for the secondary mood/message store.
///
/// Specified at its interface boundary only; the desktop shell does not mount
/// a mood view, but the contract is carried as a typed client.
#[derive(Debug, Clone)]
pub struct MoodApi {
    base_url: String,
    client: reqwest::Client,
}

impl MoodApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_moods(&self) -> Result<Vec<MoodEntry>, CoreError> {
        Ok(self
            .client
            .get(self.url("/api/moods"))
            .send()
            .await?
            .json()
            .await?)
    }

    pub async fn post_mood(&self, entry: &MoodEntry) -> Result<MoodEntry, CoreError> {
        Ok(self
            .client
            .post(self.url("/api/moods"))
            .json(entry)
            .send()
            .await?
            .json()
            .await?)
    }

    pub async fn list_messages(&self) -> Result<Vec<SharedMessage>, CoreError> {
        Ok(self
            .client
            .get(self.url("/api/messages"))
            .send()
            .await?
            .json()
            .await?)
    }

    pub async fn post_message(&self, message: &SharedMessage) -> Result<SharedMessage, CoreError> {
        Ok(self
            .client
            .post(self.url("/api/messages"))
            .json(message)
            .send()
            .await?
            .json()
            .await?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let store = HttpDiaryStore::new("http://localhost:4000/");
        assert_eq!(
            store.url("/api/diary/entries/u1"),
            "http://localhost:4000/api/diary/entries/u1"
        );
    }

    #[test]
    fn json_kind_names_shapes() {
        assert_eq!(json_kind(&json!({"error": "oops"})), "an object");
        assert_eq!(json_kind(&Value::Null), "null");
    }
}
