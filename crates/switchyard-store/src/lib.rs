//! Switchyard Store - Routing Rule Persistence
//!
//! This crate provides the rule storage layer for Switchyard:
//! - RuleStore: Backend-agnostic async CRUD trait
//! - SqliteRuleStore: Rule persistence (SQLite)
//! - MemoryRuleStore: Process-local store for tests and ephemeral use

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;

pub use error::{Error, Result};
pub use store::{default_data_dir, default_db_path, MemoryRuleStore, RuleStore, SqliteRuleStore};
