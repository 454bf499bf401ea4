use serde::{Deserialize, Serialize};

// --- MediaWiki `action=parse` Response Structures ---

/// Top-level body of an `action=parse` call. Exactly one of the two is set.
#[derive(Debug, Deserialize, Serialize)]
pub struct ParseResponse {
    pub parse: Option<ParseBody>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ParseBody {
    pub title: String,
    #[serde(rename = "pageid", default)]
    pub page_id: Option<i64>,
    #[serde(default)]
    pub wikitext: Option<WikitextBody>,
    #[serde(default)]
    pub sections: Option<Vec<SectionEntry>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WikitextBody {
    #[serde(rename = "*")]
    pub content: String,
}

/// One entry of `prop=sections`. `index` is kept as the raw string the API sends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionEntry {
    pub line: String,
    pub anchor: String,
    pub index: String,
}

impl SectionEntry {
    pub fn new(line: &str, anchor: &str, index: &str) -> Self {
        Self {
            line: line.to_string(),
            anchor: anchor.to_string(),
            index: index.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}
