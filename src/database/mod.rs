//! QuranReader database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value table that backs the reading state.
//!
//! # Usage
//!
//! ```no_run
//! use quranreader::database::{Database, KvStore};
//!
//! // Open a persistent database
//! let db = Database::open("quranreader.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Read and write keys through the kv store
//! let kv = KvStore::new(db.connection());
//! ```

pub mod connection;
pub mod kv;
pub mod migrations;

pub use connection::Database;
pub use kv::KvStore;
