use crate::error::{RelayError, Result};

use super::types::{ChatCompletionRequest, ChatCompletionResponse};

// Cap on how much upstream body is kept for server-side diagnostics.
const BODY_SNIPPET_LEN: usize = 256;

pub async fn chat_completions(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    request: &ChatCompletionRequest,
) -> Result<ChatCompletionResponse> {
    let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));

    let response = http
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await
        .map_err(|e| RelayError::UpstreamUnavailable(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| {
        RelayError::UpstreamUnavailable(format!("reading upstream body failed: {e}"))
    })?;

    if !status.is_success() {
        return Err(RelayError::UpstreamUnavailable(format!(
            "upstream returned {}: {}",
            status,
            body_snippet(&bytes)
        )));
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        RelayError::UpstreamProtocol(format!(
            "undecodable upstream body ({e}): {}",
            body_snippet(&bytes)
        ))
    })
}

fn body_snippet(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut snippet: String = text.chars().take(BODY_SNIPPET_LEN).collect();
    if text.chars().count() > BODY_SNIPPET_LEN {
        snippet.push_str("...");
    }
    snippet
}
