//! RPC method handler for the QuranReader JSON-RPC protocol.
//!
//! Extracted from `main.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls from the
//! UI shell to the `ReaderApp`. Page bounds checking lives here — the core
//! stores never see an out-of-range navigation.

use std::sync::Mutex;

use crate::app::ReaderApp;

use serde_json::{json, Value};

fn bookmark_json(b: &crate::types::bookmark::Bookmark) -> Value {
    json!({"id": b.id, "page": b.page, "label": b.label, "createdAt": b.created_at})
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<ReaderApp>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Bookmarks ───
        "bookmark.add" => {
            let page = params.get("page").and_then(|v| v.as_u64()).ok_or("missing page")?;
            let label = params.get("label").and_then(|v| v.as_str());
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if page < 1 || page > a.total_pages() as u64 {
                return Err(format!("page out of range: {}", page));
            }
            let bookmark = a.add_bookmark(page as u32, label);
            Ok(bookmark_json(&bookmark))
        }
        "bookmark.remove" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.remove_bookmark(id);
            Ok(json!({"ok": true}))
        }
        "bookmark.update" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let label = params.get("label").and_then(|v| v.as_str()).ok_or("missing label")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.update_bookmark(id, label);
            Ok(json!({"ok": true}))
        }
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let arr: Vec<Value> = a.bookmarks().iter().map(bookmark_json).collect();
            Ok(json!(arr))
        }
        "bookmark.toggle" => {
            let page = params.get("page").and_then(|v| v.as_u64()).ok_or("missing page")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if page < 1 || page > a.total_pages() as u64 {
                return Err(format!("page out of range: {}", page));
            }
            match a.toggle_bookmark(page as u32) {
                Some(bookmark) => Ok(json!({"bookmarked": true, "bookmark": bookmark_json(&bookmark)})),
                None => Ok(json!({"bookmarked": false})),
            }
        }
        "bookmark.contains" => {
            let page = params.get("page").and_then(|v| v.as_u64()).ok_or("missing page")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            // Pages outside the document can never hold a bookmark
            let bookmarked =
                page >= 1 && page <= a.total_pages() as u64 && a.is_bookmarked(page as u32);
            Ok(json!({"bookmarked": bookmarked}))
        }

        // ─── Page tracking ───
        "page.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"page": a.last_page()}))
        }
        "page.set" => {
            let page = params.get("page").and_then(|v| v.as_u64()).ok_or("missing page")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            // Out-of-range navigation is a silent no-op, not an error
            if page >= 1 && page <= a.total_pages() as u64 {
                a.on_page_change(page as u32);
            }
            Ok(json!({"page": a.last_page()}))
        }
        "page.set_total" => {
            let total = params.get("total").and_then(|v| v.as_u64()).ok_or("missing total")? as u32;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_total_pages(total);
            Ok(json!({"total": a.total_pages()}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
