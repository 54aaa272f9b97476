//! Notion API client implementing [`HouseholdStore`].
//!
//! Thin transport over three endpoints: `POST /v1/databases/{id}/query` for
//! the two source collections (with cursor pagination) and `POST /v1/pages`
//! for creating to-dos. All JSON shaping lives in [`super::props`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::Config;
use crate::domain::ids::TodoId;
use crate::domain::records::{Chore, Roomie};
use crate::domain::todo::TodoDraft;
use crate::error::{Result, RotaError};
use crate::ports::HouseholdStore;

use super::props;

/// Notion API version header value, pinned so schema changes upstream are an
/// explicit upgrade here.
pub const NOTION_VERSION: &str = "2022-06-28";

const DEFAULT_BASE_URL: &str = "https://api.notion.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    roomies_db: String,
    chores_db: String,
    todos_db: String,
}

impl NotionClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::Api`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RotaError::Api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: config.token.clone(),
            roomies_db: config.roomies_db.clone(),
            chores_db: config.chores_db.clone(),
            todos_db: config.todos_db.clone(),
        })
    }

    /// Override the API base URL (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Body snippet only; the token never appears in responses.
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(RotaError::Api(format!("{status}: {snippet}")));
        }

        response
            .json()
            .await
            .map_err(|e| RotaError::Api(format!("invalid json response: {e}")))
    }

    /// Query a database, following `next_cursor` until `has_more` is false.
    async fn query_database(&self, database_id: &str) -> Result<Vec<Value>> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, database_id);

        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = match &cursor {
                Some(c) => json!({ "start_cursor": c }),
                None => json!({}),
            };

            let response = self.post(&url, &body).await?;

            if let Some(results) = response.get("results").and_then(Value::as_array) {
                pages.extend(results.iter().cloned());
            }

            let has_more = response
                .get("has_more")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            cursor = response
                .get("next_cursor")
                .and_then(Value::as_str)
                .map(str::to_string);

            if !has_more || cursor.is_none() {
                break;
            }
        }

        debug!(database_id, pages = pages.len(), "queried database");
        Ok(pages)
    }
}

#[async_trait]
impl HouseholdStore for NotionClient {
    async fn list_roomies(&self) -> Result<Vec<Roomie>> {
        let pages = self.query_database(&self.roomies_db).await?;
        Ok(pages.iter().filter_map(props::roomie_from_page).collect())
    }

    async fn list_chores(&self) -> Result<Vec<Chore>> {
        let pages = self.query_database(&self.chores_db).await?;
        Ok(pages.iter().filter_map(props::chore_from_page).collect())
    }

    async fn create_todo(&self, draft: &TodoDraft) -> Result<TodoId> {
        let url = format!("{}/v1/pages", self.base_url);
        let body = props::todo_request(&self.todos_db, draft);

        let response = self.post(&url, &body).await?;
        props::created_page_id(&response)
    }
}
