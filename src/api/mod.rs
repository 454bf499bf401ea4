pub mod liquipedia_client;
pub mod models;
pub mod parsers;

use anyhow::Result;

pub use liquipedia_client::LiquipediaClient;
pub use models::SectionEntry;

/// Upstream wiki content. Each call may block on the shared rate limit.
pub trait WikiSource {
    /// Wikitext of one numbered section of `page` (0 is the lead section)
    fn fetch_section(&mut self, page: &str, section: i32) -> Result<String>;

    /// Table of contents of `page`
    fn fetch_section_list(&mut self, page: &str) -> Result<Vec<SectionEntry>>;
}
