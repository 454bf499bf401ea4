pub mod connection;
pub mod setup;
mod store;
pub mod tournaments;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use store::SqliteStore;
