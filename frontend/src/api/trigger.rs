use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use shared::{Result, SharedError, TriggerResponse, TriggerTransport};

/// Parses the body of a `/trigger/` response.
///
/// The server answers failures with a JSON body and a 5xx status, so the
/// status code is not consulted; an unreadable body counts as a network error.
pub fn parse_trigger_body(text: &str) -> Result<TriggerResponse> {
    serde_json::from_str(text).map_err(|e| SharedError::Network(format!("Parse error: {}", e)))
}

/// POSTs `body` as JSON with the CSRF header the server expects.
pub async fn post_trigger(url: &str, csrf_token: &str, body: &Value) -> Result<TriggerResponse> {
    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .header("X-CSRFToken", csrf_token)
        .json(body)
        .map_err(|e| SharedError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SharedError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("{} answered with HTTP {}", url, response.status());
    }

    let text = response
        .text()
        .await
        .map_err(|e| SharedError::Network(e.to_string()))?;
    parse_trigger_body(&text)
}

/// `TriggerTransport` backed by the browser's fetch via `gloo-net`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl TriggerTransport for GlooTransport {
    async fn post_json(&self, url: &str, csrf_token: &str, body: Value) -> Result<TriggerResponse> {
        post_trigger(url, csrf_token, &body).await
    }
}
