mod client;
mod types;

pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice};

pub struct GroqProvider;

impl GroqProvider {
    /// Issues the single outbound POST for one relayed chat request.
    pub async fn chat_completions(
        http: &reqwest::Client,
        base_url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> crate::error::Result<ChatCompletionResponse> {
        client::chat_completions(http, base_url, api_key, request).await
    }
}
