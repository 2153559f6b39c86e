//! HTTP client construction and status mapping.

use std::time::Duration;

use crate::error::{AssistantError, Result};

/// Build a reqwest client with an explicit request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("gemini-assistant/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> AssistantError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => AssistantError::Authentication(message),
        429 => AssistantError::RateLimited(message),
        _ => AssistantError::api(status, message),
    }
}

// Google APIs wrap failures as {"error": {"code": .., "message": ".."}}
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
}
