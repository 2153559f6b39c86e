//! Google Gemini `generateContent` provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};
use crate::types::Turn;

use super::http::{build_client, status_to_error};
use super::ModelProvider;

pub struct GeminiProvider {
    client: reqwest::Client,
    model: String,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config.timeout())?,
            model: config.model().to_string(),
            api_key: config.gemini_api_key().to_string(),
            base_url: config.gemini_base_url().to_string(),
        })
    }

    fn build_request_body(history: &[Turn]) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = history
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.as_ref(),
                    "parts": [{"text": turn.content}],
                })
            })
            .collect();

        serde_json::json!({ "contents": contents })
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, history: &[Turn]) -> Result<String> {
        let body = Self::build_request_body(history);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(model = %self.model, turns = history.len(), "Gemini generate");

        let resp = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let raw = resp.text().await?;
        let data: GeminiResponse = serde_json::from_str(&raw)?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AssistantError::api(status, "No candidates in Gemini response"))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        let finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown");

        // An empty model turn would be rejected on every later request.
        if text.is_empty() {
            return Err(AssistantError::api(
                status,
                format!("Gemini returned no text (finish reason: {finish_reason})"),
            ));
        }

        debug!(finish_reason, chars = text.len(), "Gemini reply received");

        Ok(text)
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
