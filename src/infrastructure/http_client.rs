use std::time::Duration;

use anyhow::{Context, Result};

use crate::global_constants;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared client for every Wikipedia call. One connection pool, one user
/// agent.
pub fn build_http_client() -> Result<reqwest::Client> {
    log::debug!(
        "[HTTP] Building client with user agent {:?}",
        global_constants::USER_AGENT
    );

    reqwest::Client::builder()
        .user_agent(global_constants::USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}
