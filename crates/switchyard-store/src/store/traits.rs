//! Trait for rule storage backends

use crate::error::Result;
use switchyard_core::{NewRule, RoutingRule, RulePatch};
use uuid::Uuid;

/// Trait for rule storage backends
///
/// This trait allows different storage implementations (SQLite, in-memory, etc.)
/// to be used interchangeably. Concurrent writers to the same rule race with
/// last-write-wins semantics.
#[async_trait::async_trait]
pub trait RuleStore: Send + Sync {
    /// All rules in store ordering
    async fn list(&self) -> Result<Vec<RoutingRule>>;

    /// Get a rule by ID
    async fn get(&self, id: Uuid) -> Result<RoutingRule>;

    /// Validate, assign an ID and persist a new rule
    async fn create(&self, input: NewRule) -> Result<RoutingRule>;

    /// Merge supplied fields into an existing rule
    async fn update(&self, id: Uuid, patch: RulePatch) -> Result<RoutingRule>;

    /// Permanently remove a rule; unknown IDs are `NotFound`
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Get the store name (for logging)
    fn name(&self) -> &str;
}
