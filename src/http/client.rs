use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use std::time::Duration;

use crate::rate_limiter::{Clock, RateLimiter, SystemClock};

/// Blocking HTTP client; every request first waits on the shared rate limiter
pub struct RateLimitedClient<C: Clock = SystemClock> {
    client: Client,
    rate_limiter: RateLimiter<C>,
}

impl<C: Clock> RateLimitedClient<C> {
    pub fn new(user_agent: &str, timeout: Duration, rate_limiter: RateLimiter<C>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, rate_limiter })
    }

    /// Body of a successful GET; non-2xx statuses are errors
    pub fn get_text(&mut self, url: &str) -> Result<String> {
        self.rate_limiter.acquire();

        let response = self.client.get(url).send().context("Failed to send GET request")?;
        let status = response.status();
        if !status.is_success() {
            bail!("API returned status: {}", status);
        }
        response.text().context("Failed to read response body")
    }

    pub fn rate_limiter(&self) -> &RateLimiter<C> {
        &self.rate_limiter
    }
}
