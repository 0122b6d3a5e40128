//! RuleMatcher implementation

use super::conditions::conditions_match;
use super::ordering::rule_order;
use crate::context::RequestContext;
use crate::rule::RoutingRule;
use tracing::trace;

/// Selection returned when no rule matches and nothing else is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// First-match evaluator over routing rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatcher {
    default_model: String,
}

impl Default for RuleMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl RuleMatcher {
    /// Create a matcher with the given default selection
    #[must_use]
    pub fn new(default_model: impl Into<String>) -> Self {
        Self {
            default_model: default_model.into(),
        }
    }

    /// Get the default selection
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Whether `rule` is enabled and all of its conditions hold
    #[must_use]
    pub fn matches(&self, rule: &RoutingRule, context: &RequestContext) -> bool {
        rule.enabled && conditions_match(&rule.conditions, context)
    }

    /// The first matching rule in store ordering.
    ///
    /// Enabled rules are ordered with [`rule_order`] before evaluation, so the
    /// caller's slice order never changes the result.
    #[must_use]
    pub fn first_match<'a>(
        &self,
        rules: &'a [RoutingRule],
        context: &RequestContext,
    ) -> Option<&'a RoutingRule> {
        let mut enabled: Vec<&'a RoutingRule> = rules.iter().filter(|rule| rule.enabled).collect();
        enabled.sort_by(|a, b| rule_order(a, b));

        let found = enabled
            .into_iter()
            .find(|rule| conditions_match(&rule.conditions, context));
        if let Some(rule) = found {
            trace!(rule_id = %rule.id, rule = %rule.name, "routing rule matched");
        }
        found
    }

    /// The selection for `context`: the first match's model, else the default
    #[must_use]
    pub fn select_model<'a>(&'a self, rules: &'a [RoutingRule], context: &RequestContext) -> &'a str {
        self.first_match(rules, context)
            .map_or(self.default_model.as_str(), |rule| {
                rule.model_selection.as_str()
            })
    }
}
