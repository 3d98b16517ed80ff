use axum::{Json, extract::State};
use std::sync::Arc;

use crate::error::{RelayError, Result};
use crate::providers::GroqProvider;
use crate::providers::groq::{ChatCompletionRequest, ChatMessage};
use crate::server::AppState;
use crate::server::chat_request::{ChatReply, ChatRequest};

/// Model requested from the upstream completion endpoint.
pub const CHAT_MODEL: &str = "llama3-70b-8192";

/// First turn of every relayed conversation; steers tone, never varies.
pub const SYSTEM_PERSONA: &str =
    "You are RamBot 🐏, a funny and helpful chatbot that makes witty jokes and puns.";

pub const CHAT_TEMPERATURE: f32 = 0.8;

pub async fn chat(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>> {
    let message = request.validated_message()?;

    let payload = ChatCompletionRequest {
        model: CHAT_MODEL.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PERSONA),
            ChatMessage::user(message),
        ],
        temperature: CHAT_TEMPERATURE,
    };

    let upstream = &app_state.config.upstream;
    let response = GroqProvider::chat_completions(
        &app_state.http,
        &upstream.base_url,
        &upstream.api_key,
        &payload,
    )
    .await?;

    let reply = response
        .first_content()
        .ok_or_else(|| {
            RelayError::UpstreamProtocol("upstream response carried no choices".to_string())
        })?
        .trim()
        .to_string();

    Ok(Json(ChatReply { reply }))
}
