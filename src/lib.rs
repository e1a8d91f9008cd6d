//! QuranReader — offline-first reading app core for a fixed PDF document.
//!
//! This library crate owns the app's durable state (last-viewed page and
//! bookmarks), the stdio RPC boundary consumed by the UI shell, and the
//! out-of-band mirror service that guarantees a durable copy of the source
//! document exists.

pub mod app;
pub mod database;
pub mod mirror;
pub mod rpc_handler;
pub mod stores;
pub mod types;
