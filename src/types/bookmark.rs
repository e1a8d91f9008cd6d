use serde::{Deserialize, Serialize};

/// A saved reference to a specific page with a user-editable label.
///
/// Serialized with camelCase field names — the persisted JSON shape is
/// `{"id": ..., "page": ..., "label": ..., "createdAt": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Opaque unique identifier, generated at creation. Immutable.
    pub id: String,
    /// 1-indexed page number.
    pub page: u32,
    /// Human-readable label. Defaults to `"Page {page}"` at creation; mutable.
    pub label: String,
    /// Creation timestamp in epoch milliseconds. Immutable.
    pub created_at: i64,
}
