// QuranReader state stores
// Write-through caches over the kv layer: bookmarks and the last-viewed page.

pub mod bookmark_store;
pub mod last_page;
