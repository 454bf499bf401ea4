use anyhow::Result;
use std::path::Path;

use super::connection::{DbPool, create_pool, get_connection};
use super::{setup, tournaments};
use crate::domain::Tournament;
use crate::storage::TournamentStore;

/// SQLite-backed tournament store
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(database_path: &Path) -> Result<Self> {
        let pool = create_pool(database_path)?;
        let mut conn = get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;
        Ok(Self { pool })
    }
}

impl TournamentStore for SqliteStore {
    fn get(&self, name: &str) -> Result<Option<Tournament>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::find_by_name(&mut conn, name)
    }

    fn upsert(&mut self, tournament: &Tournament) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::upsert_tournament(&mut conn, tournament)
    }

    fn all(&self) -> Result<Vec<Tournament>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::list_all(&mut conn)
    }
}
