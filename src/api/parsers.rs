use anyhow::{Context, Result, bail};

use super::models::{ParseBody, ParseResponse, SectionEntry};
use crate::errors::parse_context;

/// Validate a raw `action=parse` body into the typed schema
pub fn parse_response(raw: &str) -> Result<ParseBody> {
    let response: ParseResponse =
        serde_json::from_str(raw).with_context(|| parse_context("parse response"))?;

    if let Some(error) = response.error {
        bail!("API error {}: {}", error.code, error.info);
    }

    response
        .parse
        .context("API response has neither `parse` nor `error`")
}

/// Extract the section wikitext from a `prop=wikitext` body
pub fn extract_wikitext(raw: &str) -> Result<String> {
    let body = parse_response(raw)?;
    let title = body.title;
    body.wikitext
        .map(|w| w.content)
        .with_context(|| format!("No wikitext in response for {}", title))
}

/// Extract the section list from a `prop=sections` body
pub fn extract_sections(raw: &str) -> Result<Vec<SectionEntry>> {
    let body = parse_response(raw)?;
    let title = body.title;
    body.sections
        .with_context(|| format!("No sections in response for {}", title))
}
