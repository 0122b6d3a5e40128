//! Switchyard Core - Routing Rules
//!
//! This crate provides the routing model for Switchyard:
//! - Rule: Routing rule records, conditions, create/patch inputs
//! - Context: Per-request facts evaluated against rule conditions
//! - Matcher: First-match rule evaluation with an injected default

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod matcher;
pub mod rule;

pub use context::RequestContext;
pub use error::{Error, Result};
pub use matcher::{rule_order, sort_rules, RuleMatcher, DEFAULT_MODEL};
pub use rule::{CostSensitivity, NewRule, RoutingRule, RuleConditions, RulePatch, TokenRange};
