//! Last Page Tracker for QuranReader.
//!
//! Remembers the single page number the reader last viewed so the next
//! launch can resume there. Overwritten on every navigation event, no
//! history retained.

use std::sync::Arc;

use log::warn;

use crate::database::{Database, KvStore};

/// Key under which the last-viewed page is persisted, as decimal text.
pub const LAST_PAGE_KEY: &str = "quran-last-page";

/// Trait defining last-page tracking operations.
pub trait LastPageTrackerTrait {
    /// The last-viewed page, `1` if nothing was ever stored.
    fn get(&self) -> u32;
    /// Overwrites the tracked page and persists it immediately.
    fn set(&mut self, page: u32);
}

/// Last-page tracker backed by the kv layer.
pub struct LastPageTracker {
    db: Arc<Database>,
    page: u32,
}

impl LastPageTracker {
    /// Creates the tracker and loads the persisted page.
    ///
    /// Defaults to page 1 when no value exists or the stored text does not
    /// parse as a positive integer.
    pub fn new(db: Arc<Database>) -> Self {
        let page = Self::load(&db);
        Self { db, page }
    }

    fn load(db: &Database) -> u32 {
        let kv = KvStore::new(db.connection());
        match kv.get(LAST_PAGE_KEY) {
            Ok(Some(text)) => match text.parse::<u32>() {
                Ok(page) if page >= 1 => page,
                _ => 1,
            },
            Ok(None) => 1,
            Err(e) => {
                warn!("failed to read last page: {}", e);
                1
            }
        }
    }
}

impl LastPageTrackerTrait for LastPageTracker {
    fn get(&self) -> u32 {
        self.page
    }

    fn set(&mut self, page: u32) {
        self.page = page;
        let kv = KvStore::new(self.db.connection());
        if let Err(e) = kv.set(LAST_PAGE_KEY, &page.to_string()) {
            warn!("failed to persist last page: {}", e);
        }
    }
}
