//! Store - Routing rule persistence
//!
//! This module provides the storage layer for routing rules.
//! The SQLite backend uses sqlx for async access (embedded, no server required).
//! Every backend returns `list()` in store ordering: priority descending,
//! then name ascending, then id.

mod helpers;
mod memory_store;
mod sqlite_store;
mod traits;

#[cfg(test)]
mod tests;

pub use helpers::{default_data_dir, default_db_path};
pub use memory_store::MemoryRuleStore;
pub use sqlite_store::SqliteRuleStore;
pub use traits::RuleStore;
