//! Routing decision types

use serde::Serialize;
use switchyard_core::RoutingRule;
use uuid::Uuid;

/// Where a selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    /// An enabled rule matched
    Rule,
    /// No rule matched
    Default,
    /// The rule store could not be read
    StoreUnavailable,
}

/// Outcome of routing one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    /// Selected model identifier
    pub model: String,
    /// Why this model was selected
    pub source: DecisionSource,
    /// Matching rule ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<Uuid>,
    /// Matching rule name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    /// The matching rule's advisory fallback, for callers that retry on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_model: Option<String>,
}

impl RoutingDecision {
    pub(crate) fn from_rule(rule: &RoutingRule) -> Self {
        Self {
            model: rule.model_selection.clone(),
            source: DecisionSource::Rule,
            rule_id: Some(rule.id),
            rule_name: Some(rule.name.clone()),
            fallback_model: rule.fallback_model.clone(),
        }
    }

    pub(crate) fn default_model(model: &str) -> Self {
        Self::without_rule(model, DecisionSource::Default)
    }

    pub(crate) fn store_unavailable(model: &str) -> Self {
        Self::without_rule(model, DecisionSource::StoreUnavailable)
    }

    fn without_rule(model: &str, source: DecisionSource) -> Self {
        Self {
            model: model.to_string(),
            source,
            rule_id: None,
            rule_name: None,
            fallback_model: None,
        }
    }

    /// Whether a rule produced this decision
    #[must_use]
    pub fn is_rule_match(&self) -> bool {
        self.source == DecisionSource::Rule
    }
}
