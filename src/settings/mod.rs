//! Application settings
//!
//! Configuration types and layered loading (embedded defaults, files,
//! environment).

mod loader;
mod types;

pub use loader::load_config;
pub use types::{AppConfig, AuditSinkKind, StoreBackend};
