use crate::errors::ReconcileError;

use super::needs::Needs;

/// Result of reconciling one skeleton tournament
#[derive(Debug)]
pub struct TournamentOutcome {
    pub name: String,
    pub needs: Needs,
    pub written: bool,
    pub error: Option<ReconcileError>,
}

impl TournamentOutcome {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Per-tournament outcomes of a run, in skeleton order
#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub outcomes: Vec<TournamentOutcome>,
}

impl ReconcileReport {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.written).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TournamentOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn unchanged(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.needs.any() && !o.is_failure())
            .count()
    }

    pub fn outcome(&self, name: &str) -> Option<&TournamentOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}
