//! Partial rule updates
//!
//! Only supplied fields change. `conditions` is replaced as a whole.

use super::types::{RoutingRule, RuleConditions};
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Distinguish an absent field from an explicit `null`
fn double_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update for a routing rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePatch {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// New enabled flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Replacement conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<RuleConditions>,
    /// New model selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_selection: Option<String>,
    /// New fallback model; `Some(None)` clears it
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub fallback_model: Option<Option<String>>,
}

impl RulePatch {
    /// Create an empty patch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the enabled flag
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Replace the conditions
    #[must_use]
    pub fn conditions(mut self, conditions: RuleConditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Set the model selection
    #[must_use]
    pub fn model_selection(mut self, model: impl Into<String>) -> Self {
        self.model_selection = Some(model.into());
        self
    }

    /// Set or clear the fallback model
    #[must_use]
    pub fn fallback_model(mut self, model: Option<String>) -> Self {
        self.fallback_model = Some(model);
        self
    }

    /// Whether no field is supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.priority.is_none()
            && self.enabled.is_none()
            && self.conditions.is_none()
            && self.model_selection.is_none()
            && self.fallback_model.is_none()
    }

    /// Names of the supplied fields, in declaration order
    #[must_use]
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("priority", self.priority.is_some()),
            ("enabled", self.enabled.is_some()),
            ("conditions", self.conditions.is_some()),
            ("model_selection", self.model_selection.is_some()),
            ("fallback_model", self.fallback_model.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }

    /// Check supplied fields before merging
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            super::validate_name(name)?;
        }
        if let Some(model) = &self.model_selection {
            super::validate_model_selection(model)?;
        }
        Ok(())
    }

    /// Merge supplied fields into `rule`.
    ///
    /// Returns the names of fields whose value actually changed. Timestamps
    /// are left to the caller.
    pub fn apply(&self, rule: &mut RoutingRule) -> Result<Vec<&'static str>> {
        self.validate()?;

        let mut changed = Vec::new();
        if let Some(name) = &self.name {
            if *name != rule.name {
                rule.name = name.clone();
                changed.push("name");
            }
        }
        if let Some(priority) = self.priority {
            if priority != rule.priority {
                rule.priority = priority;
                changed.push("priority");
            }
        }
        if let Some(enabled) = self.enabled {
            if enabled != rule.enabled {
                rule.enabled = enabled;
                changed.push("enabled");
            }
        }
        if let Some(conditions) = &self.conditions {
            if *conditions != rule.conditions {
                rule.conditions = conditions.clone();
                changed.push("conditions");
            }
        }
        if let Some(model) = &self.model_selection {
            if *model != rule.model_selection {
                rule.model_selection = model.clone();
                changed.push("model_selection");
            }
        }
        if let Some(fallback) = &self.fallback_model {
            if *fallback != rule.fallback_model {
                rule.fallback_model = fallback.clone();
                changed.push("fallback_model");
            }
        }
        Ok(changed)
    }
}
