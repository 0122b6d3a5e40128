//! Core rule types

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

// ============================================================================
// Cost Sensitivity
// ============================================================================

/// How strongly a request prefers cheaper models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSensitivity {
    /// Quality first
    Low,
    /// Balanced
    Medium,
    /// Cost first
    High,
}

impl CostSensitivity {
    /// Get the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for CostSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CostSensitivity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown cost sensitivity: {s}")),
        }
    }
}

// ============================================================================
// Conditions
// ============================================================================

/// Inclusive token-count bounds; an absent bound is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRange {
    /// Lower bound (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    /// Upper bound (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

impl TokenRange {
    /// Create a range with both bounds optional
    #[must_use]
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Range with only a lower bound
    #[must_use]
    pub fn at_least(min: u64) -> Self {
        Self::new(Some(min), None)
    }

    /// Range with only an upper bound
    #[must_use]
    pub fn at_most(max: u64) -> Self {
        Self::new(None, Some(max))
    }

    /// Range with both bounds
    #[must_use]
    pub fn between(min: u64, max: u64) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Whether `count` lies within the bounds
    #[must_use]
    pub fn contains(&self, count: u64) -> bool {
        self.min.map_or(true, |min| count >= min) && self.max.map_or(true, |max| count <= max)
    }
}

/// Conjunction of optional predicates; absent fields impose no constraint.
///
/// An empty `features` or `tenants` set is treated as absent, so
/// `{"features": [], "tenants": []}` matches every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConditions {
    /// Token-count bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<TokenRange>,
    /// Required cost sensitivity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_sensitivity: Option<CostSensitivity>,
    /// Allowed feature names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<BTreeSet<String>>,
    /// Allowed tenant identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenants: Option<BTreeSet<String>>,
    /// Response-time target in milliseconds.
    ///
    /// Stored and returned, but not evaluated by the matcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u64>,
}

impl RuleConditions {
    /// Conditions that match every request
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether no evaluated predicate is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_none()
            && self.cost_sensitivity.is_none()
            && self.features.as_ref().is_none_or(BTreeSet::is_empty)
            && self.tenants.as_ref().is_none_or(BTreeSet::is_empty)
    }

    /// Set token-count bounds
    #[must_use]
    pub fn with_token_count(mut self, range: TokenRange) -> Self {
        self.token_count = Some(range);
        self
    }

    /// Set required cost sensitivity
    #[must_use]
    pub fn with_cost_sensitivity(mut self, cost_sensitivity: CostSensitivity) -> Self {
        self.cost_sensitivity = Some(cost_sensitivity);
        self
    }

    /// Set allowed features
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    /// Set allowed tenants
    #[must_use]
    pub fn with_tenants<I, S>(mut self, tenants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tenants = Some(tenants.into_iter().map(Into::into).collect());
        self
    }

    /// Set the response-time target
    #[must_use]
    pub fn with_response_time(mut self, millis: u64) -> Self {
        self.response_time = Some(millis);
        self
    }
}

// ============================================================================
// Routing Rule
// ============================================================================

/// A stored routing rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingRule {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Human-readable label (not unique)
    pub name: String,
    /// Evaluation priority; higher is evaluated first
    pub priority: i64,
    /// Disabled rules are kept but never match
    pub enabled: bool,
    /// Conditions that must all hold
    #[serde(default)]
    pub conditions: RuleConditions,
    /// Model identifier returned on match
    pub model_selection: String,
    /// Advisory fallback model, not consulted when matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_model: Option<String>,
    /// When the rule was created
    pub created_at: DateTime<Utc>,
    /// When the rule was last changed
    pub updated_at: DateTime<Utc>,
}

impl RoutingRule {
    /// Build a stored rule from a validated create input
    pub fn from_new(input: NewRule, id: Uuid, now: DateTime<Utc>) -> Result<Self> {
        input.validate()?;
        Ok(Self {
            id,
            name: input.name,
            priority: input.priority,
            enabled: input.enabled,
            conditions: input.conditions,
            model_selection: input.model_selection,
            fallback_model: input.fallback_model,
            created_at: now,
            updated_at: now,
        })
    }
}

fn default_priority() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

/// Input for creating a routing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRule {
    /// Human-readable label
    pub name: String,
    /// Evaluation priority
    #[serde(default = "default_priority")]
    pub priority: i64,
    /// Whether the rule takes part in matching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Conditions that must all hold
    #[serde(default)]
    pub conditions: RuleConditions,
    /// Model identifier returned on match
    pub model_selection: String,
    /// Advisory fallback model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_model: Option<String>,
}

impl NewRule {
    /// Create an enabled, unconditional rule with priority 1
    #[must_use]
    pub fn new(name: impl Into<String>, model_selection: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: default_priority(),
            enabled: true,
            conditions: RuleConditions::default(),
            model_selection: model_selection.into(),
            fallback_model: None,
        }
    }

    /// Set the priority
    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Set whether the rule is enabled
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the conditions
    #[must_use]
    pub fn with_conditions(mut self, conditions: RuleConditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Set the fallback model
    #[must_use]
    pub fn with_fallback_model(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = Some(model.into());
        self
    }

    /// Check the input before it is stored
    pub fn validate(&self) -> Result<()> {
        super::validate_name(&self.name)?;
        super::validate_model_selection(&self.model_selection)
    }
}
