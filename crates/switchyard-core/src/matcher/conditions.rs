//! Condition evaluation

use crate::context::RequestContext;
use crate::rule::RuleConditions;

/// Whether every present condition holds for `context`.
///
/// Empty conditions match every context, and an empty `features` or
/// `tenants` set imposes no constraint. `response_time` is not evaluated.
#[must_use]
pub fn conditions_match(conditions: &RuleConditions, context: &RequestContext) -> bool {
    // Destructure so a new condition field fails to compile until handled here.
    let RuleConditions {
        token_count,
        cost_sensitivity,
        features,
        tenants,
        response_time: _,
    } = conditions;

    if let Some(range) = token_count {
        if !range.contains(context.token_count) {
            return false;
        }
    }

    if let Some(required) = cost_sensitivity {
        if context.cost_sensitivity != Some(*required) {
            return false;
        }
    }

    if let Some(allowed) = features.as_ref().filter(|set| !set.is_empty()) {
        if !allowed.contains(&context.feature) {
            return false;
        }
    }

    if let Some(allowed) = tenants.as_ref().filter(|set| !set.is_empty()) {
        match &context.tenant_id {
            Some(tenant) if allowed.contains(tenant) => {}
            _ => return false,
        }
    }

    true
}
