//! Router - store-backed model selection
//!
//! Loads the current rules from a [`RuleStore`] and runs the [`RuleMatcher`]
//! over them. When the store cannot be read, [`ModelRouter::select`] and
//! [`ModelRouter::route`] fall back to the matcher's default selection;
//! [`ModelRouter::try_select`] propagates the store error instead.

mod decision;


pub use decision::{DecisionSource, RoutingDecision};

use crate::error::Result;
use std::sync::Arc;
use switchyard_core::{RequestContext, RuleMatcher};
use switchyard_store::RuleStore;
use tracing::{debug, instrument, warn};

/// Model router over a rule store
#[derive(Clone)]
pub struct ModelRouter {
    store: Arc<dyn RuleStore>,
    matcher: RuleMatcher,
}

impl ModelRouter {
    /// Create a router reading rules from `store`
    #[must_use]
    pub fn new(store: Arc<dyn RuleStore>, matcher: RuleMatcher) -> Self {
        Self { store, matcher }
    }

    /// Get the matcher
    #[must_use]
    pub fn matcher(&self) -> &RuleMatcher {
        &self.matcher
    }

    /// Select a model, propagating store errors unchanged
    pub async fn try_select(&self, context: &RequestContext) -> Result<String> {
        let rules = self.store.list().await?;
        Ok(self.matcher.select_model(&rules, context).to_string())
    }

    /// Select a model, falling back to the default when the store is unavailable
    pub async fn select(&self, context: &RequestContext) -> String {
        self.route(context).await.model
    }

    /// Select a model and report which rule (if any) produced it
    #[instrument(skip(self, context), fields(feature = %context.feature, tokens = context.token_count))]
    pub async fn route(&self, context: &RequestContext) -> RoutingDecision {
        let rules = match self.store.list().await {
            Ok(rules) => rules,
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "Rule store unavailable, using default model");
                return RoutingDecision::store_unavailable(self.matcher.default_model());
            }
        };

        let decision = match self.matcher.first_match(&rules, context) {
            Some(rule) => RoutingDecision::from_rule(rule),
            None => RoutingDecision::default_model(self.matcher.default_model()),
        };
        debug!(model = %decision.model, source = ?decision.source, "Model selected");
        decision
    }
}
