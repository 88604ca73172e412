use std::time::Duration;

use anyhow::{Context, Result};

const USER_AGENT: &str = concat!("velopool/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for results pages. One client per process;
/// the results site is slow on race days, hence the generous timeout.
pub fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(20))
        .build()
        .context("Failed to create HTTP client")
}
