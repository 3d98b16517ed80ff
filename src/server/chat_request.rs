use serde::{Deserialize, Serialize};

use crate::error::{RelayError, Result};

/// Incoming `/chat` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// The message with surrounding whitespace removed. Rejects
    /// empty/whitespace-only input before any outbound call is made.
    pub fn validated_message(&self) -> Result<&str> {
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            return Err(RelayError::InvalidInput(
                "Message cannot be empty".to_string(),
            ));
        }
        Ok(trimmed)
    }
}

/// Outgoing `/chat` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_rejected() {
        for message in ["", " ", "\t\n  "] {
            let request = ChatRequest {
                message: message.to_string(),
            };
            assert!(request.validated_message().is_err());
        }
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let request = ChatRequest {
            message: "  Tell me a joke \n".to_string(),
        };
        assert_eq!(request.validated_message().unwrap(), "Tell me a joke");
    }
}
