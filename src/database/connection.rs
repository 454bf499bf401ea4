use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const POOL_SIZE: u32 = 2;

/// Pool over one SQLite file
pub fn create_pool(database_path: &Path) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(POOL_SIZE)
        .build(SqliteConnectionManager::file(database_path))
        .with_context(|| format!("Failed to open tournament database {}", database_path.display()))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get().context("Failed to get database connection from pool")
}
