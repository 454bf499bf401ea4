use anyhow::{Context, Result};
use std::path::Path;

use super::TournamentStore;
use crate::cache::Cache;
use crate::domain::Tournament;
use crate::errors::store_context;

const TOURNAMENTS_KEY: &str = "tournaments";

/// Tournaments kept as one pretty-printed JSON array (`tournaments.json`)
pub struct JsonStore {
    cache: Cache,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Ok(Self {
            cache: Cache::new(data_dir)?,
        })
    }

    fn load_all(&self) -> Result<Vec<Tournament>> {
        Ok(self.cache.load(TOURNAMENTS_KEY)?.unwrap_or_default())
    }
}

impl TournamentStore for JsonStore {
    fn get(&self, name: &str) -> Result<Option<Tournament>> {
        let tournaments = self.load_all().with_context(|| store_context("load", name))?;
        Ok(tournaments.into_iter().find(|t| t.name == name))
    }

    fn upsert(&mut self, tournament: &Tournament) -> Result<()> {
        let mut tournaments = self
            .load_all()
            .with_context(|| store_context("load", &tournament.name))?;

        match tournaments.iter_mut().find(|t| t.name == tournament.name) {
            Some(existing) => *existing = tournament.clone(),
            None => tournaments.push(tournament.clone()),
        }

        self.cache
            .save(TOURNAMENTS_KEY, &tournaments)
            .with_context(|| store_context("save", &tournament.name))
    }

    fn all(&self) -> Result<Vec<Tournament>> {
        self.load_all()
    }
}
