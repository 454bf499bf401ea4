use log::{info, warn};

use super::needs::Needs;
use super::report::{ReconcileReport, TournamentOutcome};
use crate::api::WikiSource;
use crate::config::settings::ReconcileSettings;
use crate::domain::dates::is_sortable_date;
use crate::domain::{ReconcileProgress, Region, Season, Tournament, UNKNOWN_SECTION};
use crate::errors::{ReconcileError, Stage};
use crate::storage::TournamentStore;
use crate::wikitext::{find_section_index, parse_infobox, parse_teams};

/// Brings persisted tournament records in line with the skeleton, fetching
/// only the categories each record is missing.
pub struct Reconciler<S: WikiSource, T: TournamentStore> {
    source: S,
    store: T,
    settings: ReconcileSettings,
}

impl<S: WikiSource, T: TournamentStore> Reconciler<S, T> {
    pub fn new(source: S, store: T, settings: ReconcileSettings) -> Self {
        Self {
            source,
            store,
            settings,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    pub fn into_parts(self) -> (S, T) {
        (self.source, self.store)
    }

    /// Reconcile every tournament of the skeleton in order. Item failures are
    /// recorded in the report and do not stop the run.
    pub fn run(&mut self, seasons: &[Season], force: bool) -> ReconcileReport {
        let total: usize = seasons.iter().map(|s| s.tournaments().count()).sum();
        info!("=== Reconciling {} tournaments ===", total);

        let mut progress = ReconcileProgress::new(total);
        let mut report = ReconcileReport::default();

        for season in seasons {
            for (index, section) in season.sections.iter().enumerate() {
                for skeleton in &section.tournaments {
                    let outcome = self.reconcile_one(season, index, skeleton, force);
                    track(&mut progress, &outcome);
                    report.outcomes.push(outcome);
                }
            }
        }

        report
    }

    /// Reconcile one skeleton tournament found in section `index` of `season`
    pub fn reconcile_one(
        &mut self,
        season: &Season,
        index: usize,
        skeleton: &Tournament,
        force: bool,
    ) -> TournamentOutcome {
        let name = skeleton.name.clone();

        let stored = match self.store.get(&name) {
            Ok(stored) => stored,
            Err(e) => {
                return failed(name, Needs::default(), ReconcileError::collaborator(&skeleton.name, Stage::Load, &e));
            }
        };

        let needs = Needs::compute(stored.as_ref(), skeleton, &season.season, index, force);
        info!("{}: {}", name, needs);

        if !needs.any() {
            return TournamentOutcome {
                name,
                needs,
                written: false,
                error: None,
            };
        }

        let mut record = stored.unwrap_or_else(|| Tournament::new(name.clone(), Region::None));

        if let Err(e) = self.merge(&mut record, needs, season, index, skeleton) {
            return failed(name, needs, e);
        }

        if let Err(e) = self.store.upsert(&record) {
            return failed(name, needs, ReconcileError::collaborator(&skeleton.name, Stage::Store, &e));
        }

        TournamentOutcome {
            name,
            needs,
            written: true,
            error: None,
        }
    }

    /// Infobox before teams: World team regions depend on the resolved tournament region.
    /// The region is settled before rosters are parsed so teams inherit the persisted one.
    fn merge(
        &mut self,
        record: &mut Tournament,
        needs: Needs,
        season: &Season,
        index: usize,
        skeleton: &Tournament,
    ) -> Result<(), ReconcileError> {
        if needs.infobox {
            self.merge_infobox(record, skeleton)?;
        }
        if needs.infobox || needs.metadata {
            record.region = skeleton.region;
        }
        if needs.teams {
            self.merge_teams(record)?;
        }
        if needs.metadata {
            record.season = season.season.clone();
            record.index = index;
        }
        Ok(())
    }

    fn merge_infobox(&mut self, record: &mut Tournament, skeleton: &Tournament) -> Result<(), ReconcileError> {
        let wikitext = self
            .source
            .fetch_section(&record.name, self.settings.infobox_section_index)
            .map_err(|e| ReconcileError::collaborator(&record.name, Stage::Infobox, &e))?;
        let details = parse_infobox(&wikitext);

        for date in [&details.start, &details.end] {
            if !date.is_empty() && !is_sortable_date(date) {
                warn!("{}: date {:?} is not in YYYY-MM-DD form", record.name, date);
            }
        }
        if details.region != skeleton.region {
            warn!(
                "{}: infobox region {} differs from declared {}",
                record.name, details.region, skeleton.region
            );
        }

        record.start = details.start;
        record.end = details.end;
        Ok(())
    }

    fn merge_teams(&mut self, record: &mut Tournament) -> Result<(), ReconcileError> {
        if !record.has_participation_section() {
            let sections = self
                .source
                .fetch_section_list(&record.name)
                .map_err(|e| ReconcileError::collaborator(&record.name, Stage::Sections, &e))?;
            record.participation_section = find_section_index(&sections, &self.settings.participants_title)
                .map_err(|e| ReconcileError::structural(&record.name, e))?
                .unwrap_or(UNKNOWN_SECTION);
        }

        if record.participation_section < 0 {
            warn!("Unable to find participants section for {}", record.name);
            return Ok(());
        }

        let wikitext = self
            .source
            .fetch_section(&record.name, record.participation_section)
            .map_err(|e| ReconcileError::collaborator(&record.name, Stage::Participants, &e))?;
        record.teams = parse_teams(&wikitext, record.region, self.settings.min_team_size);
        info!("  → {} teams for {}", record.teams.len(), record.name);
        Ok(())
    }
}

fn failed(name: String, needs: Needs, error: ReconcileError) -> TournamentOutcome {
    warn!("{}", error);
    TournamentOutcome {
        name,
        needs,
        written: false,
        error: Some(error),
    }
}

fn track(progress: &mut ReconcileProgress, outcome: &TournamentOutcome) {
    if outcome.is_failure() {
        progress.increment_failed();
    } else if outcome.written {
        progress.increment_written();
    } else {
        progress.increment_unchanged();
    }
}
