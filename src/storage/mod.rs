mod json;
mod memory;

use anyhow::Result;

use crate::domain::Tournament;

pub use crate::database::SqliteStore;
pub use json::JsonStore;
pub use memory::MemoryStore;

/// Persisted tournament records, keyed by name
pub trait TournamentStore {
    /// `Ok(None)` when no record exists; `Err` only for I/O failures
    fn get(&self, name: &str) -> Result<Option<Tournament>>;

    /// Replace the record with the same name, or insert it
    fn upsert(&mut self, tournament: &Tournament) -> Result<()>;

    fn all(&self) -> Result<Vec<Tournament>>;
}

impl<T: TournamentStore + ?Sized> TournamentStore for Box<T> {
    fn get(&self, name: &str) -> Result<Option<Tournament>> {
        (**self).get(name)
    }

    fn upsert(&mut self, tournament: &Tournament) -> Result<()> {
        (**self).upsert(tournament)
    }

    fn all(&self) -> Result<Vec<Tournament>> {
        (**self).all()
    }
}
