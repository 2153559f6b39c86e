//! Google Custom Search JSON API provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};
use crate::types::SearchOutcome;

use super::http::{build_client, status_to_error};
use super::SearchProvider;

pub struct GoogleSearchProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    engine_id: Option<String>,
    base_url: String,
}

impl GoogleSearchProvider {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config.timeout())?,
            api_key: config.search_api_key().map(str::to_string),
            engine_id: config.search_engine_id().map(str::to_string),
            base_url: config.search_base_url().to_string(),
        })
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AssistantError::Configuration("Missing SEARCH_API_KEY".into()))?;
        let cx = self
            .engine_id
            .as_deref()
            .ok_or_else(|| AssistantError::Configuration("Missing SEARCH_ENGINE_ID".into()))?;
        Ok((key, cx))
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(&self, query: &str) -> Result<SearchOutcome> {
        let (key, cx) = self.credentials()?;
        let url = format!("{}/customsearch/v1", self.base_url);

        debug!(query, "Google search");

        let resp = self
            .client
            .get(&url)
            .query(&[("key", key), ("cx", cx), ("q", query)])
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let raw = resp.text().await?;
        let data: SearchResponse = serde_json::from_str(&raw)?;

        match data.items.into_iter().next() {
            Some(SearchItem {
                snippet: Some(snippet),
            }) => Ok(SearchOutcome::Snippet(snippet)),
            Some(_) => Err(AssistantError::api(
                status,
                "First search result has no snippet",
            )),
            None => Ok(SearchOutcome::NoResults),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    snippet: Option<String>,
}
