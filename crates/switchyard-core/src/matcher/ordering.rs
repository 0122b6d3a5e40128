//! Rule ordering

use crate::rule::RoutingRule;
use std::cmp::Ordering;

/// Store ordering: priority descending, then name ascending, then id.
#[must_use]
pub fn rule_order(a: &RoutingRule, b: &RoutingRule) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort rules into store ordering
pub fn sort_rules(rules: &mut [RoutingRule]) {
    rules.sort_by(rule_order);
}
