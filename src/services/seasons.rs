use anyhow::{Context, Result};

use crate::domain::{Season, Section, Tournament};
use crate::errors::store_context;
use crate::storage::TournamentStore;

/// Flesh out the skeleton with persisted records. The skeleton's declared
/// region wins over the stored one.
pub fn load_seasons<T: TournamentStore + ?Sized>(skeleton: &[Season], store: &T) -> Result<Vec<Season>> {
    skeleton.iter().map(|season| load_season(season, store)).collect()
}

fn load_season<T: TournamentStore + ?Sized>(season: &Season, store: &T) -> Result<Season> {
    let sections = season
        .sections
        .iter()
        .map(|section| load_section(section, store))
        .collect::<Result<Vec<_>>>()?;

    Ok(Season {
        season: season.season.clone(),
        sections,
    })
}

fn load_section<T: TournamentStore + ?Sized>(section: &Section, store: &T) -> Result<Section> {
    let tournaments = section
        .tournaments
        .iter()
        .map(|skeleton| load_tournament(skeleton, store))
        .collect::<Result<Vec<_>>>()?;

    Ok(Section {
        name: section.name.clone(),
        tournaments,
    })
}

fn load_tournament<T: TournamentStore + ?Sized>(skeleton: &Tournament, store: &T) -> Result<Tournament> {
    let stored = store
        .get(&skeleton.name)
        .with_context(|| store_context("load", &skeleton.name))?
        .with_context(|| format!("No stored record for {}; run update first", skeleton.name))?;

    Ok(Tournament {
        region: skeleton.region,
        ..stored
    })
}
