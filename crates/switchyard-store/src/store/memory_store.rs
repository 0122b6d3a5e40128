//! MemoryRuleStore - process-local rule storage

use super::traits::RuleStore;
use crate::error::{Error, Result};
use chrono::Utc;
use std::collections::HashMap;
use switchyard_core::{sort_rules, NewRule, RoutingRule, RulePatch};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Rule store backed by a `HashMap`; contents are lost on drop
#[derive(Default)]
pub struct MemoryRuleStore {
    rules: RwLock<HashMap<Uuid, RoutingRule>>,
}

impl MemoryRuleStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rules
    pub async fn len(&self) -> usize {
        self.rules.read().await.len()
    }

    /// Whether the store holds no rules
    pub async fn is_empty(&self) -> bool {
        self.rules.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl RuleStore for MemoryRuleStore {
    async fn list(&self) -> Result<Vec<RoutingRule>> {
        let mut rules: Vec<RoutingRule> = self.rules.read().await.values().cloned().collect();
        sort_rules(&mut rules);
        Ok(rules)
    }

    async fn get(&self, id: Uuid) -> Result<RoutingRule> {
        self.rules
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    async fn create(&self, input: NewRule) -> Result<RoutingRule> {
        let rule = RoutingRule::from_new(input, Uuid::new_v4(), Utc::now())?;
        self.rules.write().await.insert(rule.id, rule.clone());
        debug!("Created routing rule {}", rule.id);
        Ok(rule)
    }

    async fn update(&self, id: Uuid, patch: RulePatch) -> Result<RoutingRule> {
        let mut rules = self.rules.write().await;
        let rule = rules
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let changed = patch.apply(rule)?;
        if !changed.is_empty() {
            rule.updated_at = Utc::now();
            debug!(?changed, "Updated routing rule {}", id);
        }
        Ok(rule.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.rules
            .write()
            .await
            .remove(&id)
            .map(|_| debug!("Deleted routing rule {}", id))
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
