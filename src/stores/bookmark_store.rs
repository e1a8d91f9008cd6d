//! Bookmark Store for QuranReader.
//!
//! Implements `BookmarkStoreTrait` — CRUD operations for page bookmarks,
//! backed by the kv layer as a write-through cache. The in-memory collection
//! is the authority for the current session; persistence failures are logged
//! and swallowed so a broken disk can never block reading.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use uuid::Uuid;

use crate::database::{Database, KvStore};
use crate::types::bookmark::Bookmark;

/// Key under which the bookmark collection is persisted, as a JSON array.
pub const BOOKMARKS_KEY: &str = "quran-bookmarks";

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Adds a bookmark for `page`. Returns the created record.
    fn add(&mut self, page: u32, label: Option<&str>) -> Bookmark;
    /// Removes the bookmark with the given id. No-op if absent.
    fn remove(&mut self, id: &str);
    /// Replaces the label of the matching bookmark. No-op if absent.
    fn update_label(&mut self, id: &str, label: &str);
    /// Returns true iff at least one bookmark references `page`.
    fn is_bookmarked(&self, page: u32) -> bool;
    /// Returns the first bookmark referencing `page`, if any.
    fn find_by_page(&self, page: u32) -> Option<&Bookmark>;
    /// All bookmarks in insertion order.
    fn bookmarks(&self) -> &[Bookmark];
    /// All bookmarks sorted by page ascending, for display.
    fn bookmarks_by_page(&self) -> Vec<Bookmark>;
}

/// Bookmark store backed by the kv layer with an in-memory cache.
pub struct BookmarkStore {
    db: Arc<Database>,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Creates the store and loads the persisted collection.
    ///
    /// Missing, corrupt, or unreadable data initializes an empty collection —
    /// a load problem never surfaces to the caller.
    pub fn new(db: Arc<Database>) -> Self {
        let bookmarks = Self::load(&db);
        Self { db, bookmarks }
    }

    fn load(db: &Database) -> Vec<Bookmark> {
        let kv = KvStore::new(db.connection());
        match kv.get(BOOKMARKS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("discarding unparsable bookmark collection: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read bookmark collection: {}", e);
                Vec::new()
            }
        }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Writes the full collection to durable storage.
    ///
    /// Exactly one attempt per mutation, no retry. A failure leaves the
    /// in-memory collection as the session authority.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.bookmarks) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize bookmark collection: {}", e);
                return;
            }
        };
        let kv = KvStore::new(self.db.connection());
        if let Err(e) = kv.set(BOOKMARKS_KEY, &json) {
            warn!("failed to persist bookmark collection: {}", e);
        }
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    /// Adds a new bookmark with a fresh id and a label defaulting to
    /// `"Page {page}"`. Appended to the collection — insertion order is kept,
    /// display sorting is the consumer's job.
    fn add(&mut self, page: u32, label: Option<&str>) -> Bookmark {
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            page,
            label: label
                .map(str::to_string)
                .unwrap_or_else(|| format!("Page {}", page)),
            created_at: Self::now_millis(),
        };
        self.bookmarks.push(bookmark.clone());
        self.persist();
        bookmark
    }

    fn remove(&mut self, id: &str) {
        self.bookmarks.retain(|b| b.id != id);
        self.persist();
    }

    /// Replaces only the label; `page` and `created_at` are untouched.
    fn update_label(&mut self, id: &str, label: &str) {
        if let Some(bookmark) = self.bookmarks.iter_mut().find(|b| b.id == id) {
            bookmark.label = label.to_string();
        }
        self.persist();
    }

    fn is_bookmarked(&self, page: u32) -> bool {
        self.bookmarks.iter().any(|b| b.page == page)
    }

    fn find_by_page(&self, page: u32) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.page == page)
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn bookmarks_by_page(&self) -> Vec<Bookmark> {
        let mut sorted = self.bookmarks.clone();
        sorted.sort_by_key(|b| b.page);
        sorted
    }
}
