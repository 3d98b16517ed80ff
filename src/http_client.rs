use std::time::Duration;

use crate::error::{RelayError, Result};

/// Upper bound on one outbound upstream call, connect and body included.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// The process-wide outbound client. Reusing one client gives connection
/// pooling; it holds no per-request state.
pub fn build_client() -> Result<reqwest::Client> {
    build_client_with_timeout(UPSTREAM_TIMEOUT)
}

pub fn build_client_with_timeout(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| RelayError::Internal(format!("failed to build HTTP client: {e}")))
}
