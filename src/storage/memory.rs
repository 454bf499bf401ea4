use anyhow::Result;

use super::TournamentStore;
use crate::domain::Tournament;

/// In-process store that keeps insertion order and counts writes
#[derive(Debug, Default)]
pub struct MemoryStore {
    tournaments: Vec<Tournament>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(tournaments: Vec<Tournament>) -> Self {
        Self {
            tournaments,
            writes: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }
}

impl TournamentStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<Tournament>> {
        Ok(self.tournaments.iter().find(|t| t.name == name).cloned())
    }

    fn upsert(&mut self, tournament: &Tournament) -> Result<()> {
        self.writes += 1;
        match self.tournaments.iter_mut().find(|t| t.name == tournament.name) {
            Some(existing) => *existing = tournament.clone(),
            None => self.tournaments.push(tournament.clone()),
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<Tournament>> {
        Ok(self.tournaments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut store = MemoryStore::new();
        let mut t = Tournament::new("A", Region::Europe);
        store.upsert(&t).unwrap();
        t.start = "2016-01-01".to_string();
        store.upsert(&t).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.writes(), 2);
        assert_eq!(store.get("A").unwrap().unwrap().start, "2016-01-01");
        assert!(store.get("B").unwrap().is_none());
    }
}
