use anyhow::{Context, Result};
use log::{info, warn};

use crate::api::WikiSource;
use crate::config::settings::ReconcileSettings;
use crate::config::find_in_skeleton;
use crate::domain::Season;
use crate::reconcile::{ReconcileReport, Reconciler, TournamentOutcome};
use crate::storage::TournamentStore;

/// Runs the reconciler over the configured skeleton
pub struct UpdateService<S: WikiSource, T: TournamentStore> {
    reconciler: Reconciler<S, T>,
    skeleton: Vec<Season>,
}

impl<S: WikiSource, T: TournamentStore> UpdateService<S, T> {
    pub fn new(source: S, store: T, settings: ReconcileSettings, skeleton: Vec<Season>) -> Self {
        Self {
            reconciler: Reconciler::new(source, store, settings),
            skeleton,
        }
    }

    pub fn run(&mut self, force: bool) -> ReconcileReport {
        info!("=== Starting Tournament Update ===\n");
        let report = self.reconciler.run(&self.skeleton, force);
        log_summary(&report);
        info!("=== Update Complete ===");
        report
    }

    /// Force-reconcile a single skeleton tournament
    pub fn fetch_one(&mut self, name: &str) -> Result<TournamentOutcome> {
        let (season, index, skeleton) = find_in_skeleton(&self.skeleton, name)
            .with_context(|| format!("{} is not part of the season skeleton", name))?;
        Ok(self.reconciler.reconcile_one(season, index, skeleton, true))
    }
}

fn log_summary(report: &ReconcileReport) {
    info!(
        "  → {} written, {} unchanged, {} failed",
        report.written(),
        report.unchanged(),
        report.failures().count()
    );
    for outcome in report.failures() {
        if let Some(error) = &outcome.error {
            warn!("  ✗ {}", error);
        }
    }
}

/// One line per tournament: needs, and whether it was written or failed
pub fn format_report(report: &ReconcileReport) -> String {
    report
        .outcomes
        .iter()
        .map(format_outcome)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_outcome(outcome: &TournamentOutcome) -> String {
    let status = match (&outcome.error, outcome.written) {
        (Some(error), _) => format!("failed: {}", error),
        (None, true) => "written".to_string(),
        (None, false) => "unchanged".to_string(),
    };
    format!("{} [{}] {}", outcome.name, outcome.needs, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SectionEntry;
    use crate::config::rlcs_seasons;
    use crate::reconcile::Needs;
    use crate::storage::MemoryStore;

    struct Offline;

    impl WikiSource for Offline {
        fn fetch_section(&mut self, page: &str, _section: i32) -> Result<String> {
            anyhow::bail!("offline: {}", page)
        }

        fn fetch_section_list(&mut self, page: &str) -> Result<Vec<SectionEntry>> {
            anyhow::bail!("offline: {}", page)
        }
    }

    #[test]
    fn test_fetch_one_rejects_unknown_tournament() {
        let mut service = UpdateService::new(Offline, MemoryStore::new(), ReconcileSettings::default(), rlcs_seasons());
        let err = service.fetch_one("Not A Tournament").unwrap_err();
        assert!(err.to_string().contains("not part of the season skeleton"));
    }

    #[test]
    fn test_offline_run_reports_every_item_as_failed() {
        let mut service = UpdateService::new(Offline, MemoryStore::new(), ReconcileSettings::default(), rlcs_seasons());
        let report = service.run(false);
        assert_eq!(report.failures().count(), report.outcomes.len());
        assert_eq!(report.written(), 0);
    }

    #[test]
    fn test_format_outcome() {
        let outcome = TournamentOutcome {
            name: "Rocket League Championship Series/Season 3".to_string(),
            needs: Needs {
                teams: true,
                ..Needs::default()
            },
            written: true,
            error: None,
        };
        assert_eq!(
            format_outcome(&outcome),
            "Rocket League Championship Series/Season 3 [noinfobox teams nometadata] written"
        );
    }
}
