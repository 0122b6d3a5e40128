//! Matcher - first-match rule evaluation
//!
//! Maps (rules, context) to a model selection. Evaluation is pure and
//! synchronous: disabled rules are skipped, the remaining rules are walked in
//! store ordering regardless of input order, and the first rule whose
//! conditions all hold wins. When no
//! rule matches, the matcher's configured default is returned.
//!
//! # Module Structure
//!
//! - `conditions`: Per-predicate checks and the conjunction over them
//! - `ordering`: Deterministic store ordering (priority desc, name, id)
//! - `selector`: RuleMatcher

mod conditions;
mod ordering;
mod selector;

#[cfg(test)]
mod tests;

pub use conditions::conditions_match;
pub use ordering::{rule_order, sort_rules};
pub use selector::{RuleMatcher, DEFAULT_MODEL};
