//! Rule - routing rule records
//!
//! A routing rule is a named, prioritized, conditional mapping from request
//! characteristics to a target model identifier.
//!
//! # Module Structure
//!
//! - `types`: Stored rule, condition and create-input types
//! - `patch`: Partial update with merge semantics

mod patch;
mod types;


pub use patch::RulePatch;
pub use types::{CostSensitivity, NewRule, RoutingRule, RuleConditions, TokenRange};

use crate::error::{Error, Result};

/// Reject blank rule names
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("rule name must not be empty".to_string()));
    }
    Ok(())
}

/// Reject blank model selections
pub(crate) fn validate_model_selection(model: &str) -> Result<()> {
    if model.trim().is_empty() {
        return Err(Error::Validation(
            "model selection must not be empty".to_string(),
        ));
    }
    Ok(())
}
