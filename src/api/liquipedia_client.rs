use anyhow::{Context, Result};
use log::info;
use std::time::Duration;

use super::WikiSource;
use super::models::SectionEntry;
use super::parsers;
use crate::config::settings::ScraperSettings;
use crate::errors::fetch_context;
use crate::http::RateLimitedClient;
use crate::rate_limiter::RateLimiter;

/// Liquipedia MediaWiki API client
pub struct LiquipediaClient {
    client: RateLimitedClient,
    api_base_url: String,
}

impl LiquipediaClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let rate_limiter = RateLimiter::new(
            Duration::from_secs(settings.rate_gap_secs),
            Duration::from_secs(settings.poll_interval_secs),
        )?;
        let client = RateLimitedClient::new(
            &settings.user_agent,
            Duration::from_secs(settings.timeout_secs),
            rate_limiter,
        )?;
        Ok(Self {
            client,
            api_base_url: settings.api_base_url.clone(),
        })
    }

    fn fetch_raw(&mut self, url: &str) -> Result<String> {
        self.client.get_text(url)
    }

    // --- URL Building ---

    fn build_wikitext_url(&self, page: &str, section: i32) -> String {
        format!(
            "{}?action=parse&prop=wikitext&page={}&section={}&format=json&origin=*",
            self.api_base_url,
            urlencoding::encode(page),
            section
        )
    }

    fn build_sections_url(&self, page: &str) -> String {
        format!(
            "{}?action=parse&prop=sections&page={}&format=json&origin=*",
            self.api_base_url,
            urlencoding::encode(page)
        )
    }
}

impl WikiSource for LiquipediaClient {
    fn fetch_section(&mut self, page: &str, section: i32) -> Result<String> {
        let url = self.build_wikitext_url(page, section);
        info!("Fetching section {} of {}", section, page);
        let raw = self.fetch_raw(&url).with_context(|| fetch_context(page))?;
        parsers::extract_wikitext(&raw).with_context(|| fetch_context(page))
    }

    fn fetch_section_list(&mut self, page: &str) -> Result<Vec<SectionEntry>> {
        let url = self.build_sections_url(page);
        info!("Fetching section list of {}", page);
        let raw = self.fetch_raw(&url).with_context(|| fetch_context(page))?;
        parsers::extract_sections(&raw).with_context(|| fetch_context(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LiquipediaClient {
        LiquipediaClient::new(&ScraperSettings::default()).unwrap()
    }

    #[test]
    fn test_wikitext_url_encodes_page_title() {
        let url = client().build_wikitext_url("Rocket League Championship Series/Season 1", 0);
        assert_eq!(
            url,
            "https://liquipedia.net/rocketleague/api.php?action=parse&prop=wikitext&page=Rocket%20League%20Championship%20Series%2FSeason%201&section=0&format=json&origin=*"
        );
    }

    #[test]
    fn test_sections_url() {
        let url = client().build_sections_url("Kronovi");
        assert_eq!(
            url,
            "https://liquipedia.net/rocketleague/api.php?action=parse&prop=sections&page=Kronovi&format=json&origin=*"
        );
    }
}
