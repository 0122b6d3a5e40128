//! Admin - rule CRUD facade with audit emission
//!
//! Each successful mutation emits one audit event after the store call
//! returns. Audit delivery is at-most-once and not transactional: a sink
//! failure is logged and the mutation stands.

use crate::audit::{AuditEvent, AuditSink};
use crate::error::Result;
use std::sync::Arc;
use switchyard_core::{NewRule, RoutingRule, RulePatch};
use switchyard_store::RuleStore;
use tracing::{info, instrument, warn};
use uuid::Uuid;


/// CRUD facade over a rule store that audits every mutation
#[derive(Clone)]
pub struct RuleAdmin {
    store: Arc<dyn RuleStore>,
    audit: Arc<dyn AuditSink>,
}

impl RuleAdmin {
    /// Create a facade over `store` reporting to `audit`
    #[must_use]
    pub fn new(store: Arc<dyn RuleStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    /// Get the underlying store
    #[must_use]
    pub fn store(&self) -> &Arc<dyn RuleStore> {
        &self.store
    }

    /// All rules in store ordering
    pub async fn list(&self) -> Result<Vec<RoutingRule>> {
        Ok(self.store.list().await?)
    }

    /// Get a rule by ID
    pub async fn get(&self, id: Uuid) -> Result<RoutingRule> {
        Ok(self.store.get(id).await?)
    }

    /// Create a rule and emit `rule_created`
    #[instrument(skip(self, input), fields(rule = %input.name))]
    pub async fn create(&self, input: NewRule) -> Result<RoutingRule> {
        let rule = self.store.create(input).await?;
        info!(rule_id = %rule.id, "Routing rule created");
        self.emit(AuditEvent::rule_created(&rule)).await;
        Ok(rule)
    }

    /// Merge `patch` into a rule and emit `rule_updated`
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: RulePatch) -> Result<RoutingRule> {
        let supplied = patch.supplied_fields();
        let rule = self.store.update(id, patch).await?;
        info!(rule_id = %id, fields = ?supplied, "Routing rule updated");
        self.emit(AuditEvent::rule_updated(id, supplied)).await;
        Ok(rule)
    }

    /// Enable or disable a rule
    pub async fn set_enabled(&self, id: Uuid, enabled: bool) -> Result<RoutingRule> {
        self.update(id, RulePatch::new().enabled(enabled)).await
    }

    /// Permanently delete a rule and emit `rule_deleted`
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete(id).await?;
        info!(rule_id = %id, "Routing rule deleted");
        self.emit(AuditEvent::rule_deleted(id)).await;
        Ok(())
    }

    async fn emit(&self, event: AuditEvent) {
        if let Err(e) = self.audit.record(&event).await {
            warn!(
                sink = self.audit.name(),
                action = %event.action,
                rule_id = %event.rule_id,
                error = %e,
                "Failed to record audit event"
            );
        }
    }
}
