use crate::error::{RelayError, Result};

/// Groq's OpenAI-compatible API root; override with GROQ_API_URL.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Settings {
    /// Reads the process environment once at startup. The loaded value is
    /// immutable for the process lifetime.
    pub fn load() -> Result<Self> {
        let api_key = validate_api_key(std::env::var("GROQ_API_KEY").ok())?;

        let base_url = std::env::var("GROQ_API_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut server = ServerConfig::default();
        if let Ok(host) = std::env::var("RELAY_HOST") {
            if !host.trim().is_empty() {
                server.host = host.trim().to_string();
            }
        }
        if let Ok(port) = std::env::var("RELAY_PORT") {
            server.port = parse_port(&port)?;
        }

        Ok(Settings {
            server,
            upstream: UpstreamConfig { api_key, base_url },
        })
    }
}

// Startup must fail here when the credential is absent, never lazily at the
// first /chat request.
fn validate_api_key(raw: Option<String>) -> Result<String> {
    match raw {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(RelayError::Config(
            "GROQ_API_KEY environment variable is not set".to_string(),
        )),
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .map_err(|_| RelayError::Config(format!("invalid RELAY_PORT value: {raw}")))
}
