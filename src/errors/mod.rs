use std::fmt;
use thiserror::Error;

/// Wikitext or section metadata that breaks an invariant the parsers rely on
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WikitextError {
    #[error("section {title:?} has non-numeric index {index:?}")]
    NonNumericSectionIndex { title: String, index: String },
}

/// Where in the per-tournament pipeline a collaborator call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Infobox,
    Sections,
    Participants,
    Store,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Infobox => "infobox",
            Stage::Sections => "sections",
            Stage::Participants => "participants",
            Stage::Store => "store",
        };
        f.write_str(name)
    }
}

/// Item-level failure of a reconciliation run. The run records it and moves on.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("{tournament}: {source}")]
    Structural {
        tournament: String,
        #[source]
        source: WikitextError,
    },
    #[error("{tournament}: {stage} failed: {detail}")]
    Collaborator {
        tournament: String,
        stage: Stage,
        detail: String,
    },
}

impl ReconcileError {
    pub fn collaborator(tournament: &str, stage: Stage, err: &anyhow::Error) -> Self {
        ReconcileError::Collaborator {
            tournament: tournament.to_string(),
            stage,
            detail: format!("{:#}", err),
        }
    }

    pub fn structural(tournament: &str, source: WikitextError) -> Self {
        ReconcileError::Structural {
            tournament: tournament.to_string(),
            source,
        }
    }
}

/// Add context to fetch errors
pub fn fetch_context(page: &str) -> String {
    format!("Failed to fetch from page: {}", page)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to storage errors
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} record: {}", operation, key)
}
