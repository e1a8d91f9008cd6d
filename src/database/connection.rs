//! SQLite connection handling.
//!
//! [`Database`] owns the connection behind all reading state and brings the
//! schema up to date every time it is opened.

use rusqlite::Connection;
use std::path::Path;

use super::migrations;

/// Owns the SQLite connection backing the reading state.
///
/// Constructing a `Database` always leaves the schema current, so the stores
/// never deal with migrations themselves.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path`.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` when the file cannot be opened or a
    /// migration fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a throwaway in-memory database, mainly for tests.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` when a migration fails.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    /// The underlying connection, for the kv layer and the stores.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
