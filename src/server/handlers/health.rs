use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub api_key_configured: bool,
}

// Liveness probe; reports in-memory configuration only, never calls upstream.
pub async fn health_check(State(app_state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        api_key_configured: !app_state.config.upstream.api_key.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ServerConfig, Settings, UpstreamConfig};
    use crate::http_client;

    #[tokio::test]
    async fn reports_configured_key_without_network_io() {
        // base_url points nowhere reachable; health must not care
        let state = Arc::new(AppState {
            config: Settings {
                server: ServerConfig::default(),
                upstream: UpstreamConfig {
                    api_key: "gsk_test".to_string(),
                    base_url: "http://127.0.0.1:9".to_string(),
                },
            },
            http: http_client::build_client().unwrap(),
        });

        let Json(health) = health_check(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert!(health.api_key_configured);
    }
}
