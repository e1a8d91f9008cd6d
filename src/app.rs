//! App Core for QuranReader.
//!
//! Central struct holding both state stores, injected into the presentation
//! boundary rather than accessed as ambient state.

use std::sync::Arc;

use crate::database::Database;
use crate::stores::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::stores::last_page::{LastPageTracker, LastPageTrackerTrait};
use crate::types::bookmark::Bookmark;

/// Page count of the bundled mushaf, used until the renderer reports
/// the real count after loading the document.
pub const DEFAULT_TOTAL_PAGES: u32 = 604;

/// Central application struct holding the bookmark store and page tracker.
///
/// Both stores load their persisted state in `new`; every mutation writes
/// through immediately, so there is no explicit save-on-exit step.
pub struct ReaderApp {
    pub db: Arc<Database>,
    bookmarks: BookmarkStore,
    last_page: LastPageTracker,
    total_pages: u32,
}

impl ReaderApp {
    /// Opens the database at `db_path` and loads both stores.
    pub fn new(db_path: &str) -> Result<Self, rusqlite::Error> {
        let db = Arc::new(Database::open(db_path)?);
        Ok(Self::with_database(db))
    }

    /// Builds the app over an already-open database. Used by tests with an
    /// in-memory database.
    pub fn with_database(db: Arc<Database>) -> Self {
        let bookmarks = BookmarkStore::new(db.clone());
        let last_page = LastPageTracker::new(db.clone());
        Self {
            db,
            bookmarks,
            last_page,
            total_pages: DEFAULT_TOTAL_PAGES,
        }
    }

    // ─── Bookmarks ───

    /// Adds a bookmark for `page`; the label defaults to `"Page {page}"`.
    pub fn add_bookmark(&mut self, page: u32, label: Option<&str>) -> Bookmark {
        self.bookmarks.add(page, label)
    }

    /// Removes the bookmark with the given id. No-op if absent.
    pub fn remove_bookmark(&mut self, id: &str) {
        self.bookmarks.remove(id);
    }

    /// Replaces the label of the matching bookmark. No-op if absent.
    pub fn update_bookmark(&mut self, id: &str, label: &str) {
        self.bookmarks.update_label(id, label);
    }

    pub fn is_bookmarked(&self, page: u32) -> bool {
        self.bookmarks.is_bookmarked(page)
    }

    /// Bookmarks in display order (page ascending).
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks.bookmarks_by_page()
    }

    /// Toggles the bookmark state of `page`: removes the first bookmark on
    /// that page if one exists, otherwise adds one with the default label.
    ///
    /// Returns the created bookmark when one was added, `None` when the
    /// existing bookmark was removed.
    pub fn toggle_bookmark(&mut self, page: u32) -> Option<Bookmark> {
        match self.bookmarks.find_by_page(page).map(|b| b.id.clone()) {
            Some(id) => {
                self.bookmarks.remove(&id);
                None
            }
            None => Some(self.bookmarks.add(page, None)),
        }
    }

    // ─── Page tracking ───

    pub fn last_page(&self) -> u32 {
        self.last_page.get()
    }

    /// Navigation event hook: records `page` as the last-viewed page.
    ///
    /// Bounds checking (`1 ≤ page ≤ total_pages`) is the caller's job; this
    /// routes straight to the tracker.
    pub fn on_page_change(&mut self, page: u32) {
        self.last_page.set(page);
    }

    // ─── Document ───

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Updates the document page count once the renderer has loaded the PDF.
    pub fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total;
    }
}
