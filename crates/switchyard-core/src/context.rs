//! Request context
//!
//! The per-request facts a routing rule is evaluated against.

use crate::rule::CostSensitivity;
use serde::{Deserialize, Serialize};

/// Facts about a single request, evaluated against rule conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Estimated token count of the request
    pub token_count: u64,
    /// Feature issuing the request (e.g. "chat", "playground")
    pub feature: String,
    /// Tenant the request belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Caller-declared cost sensitivity, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_sensitivity: Option<CostSensitivity>,
}

impl RequestContext {
    /// Create a context with no tenant and no cost sensitivity
    #[must_use]
    pub fn new(token_count: u64, feature: impl Into<String>) -> Self {
        Self {
            token_count,
            feature: feature.into(),
            tenant_id: None,
            cost_sensitivity: None,
        }
    }

    /// Set the tenant
    #[must_use]
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Set the cost sensitivity
    #[must_use]
    pub fn with_cost_sensitivity(mut self, cost_sensitivity: CostSensitivity) -> Self {
        self.cost_sensitivity = Some(cost_sensitivity);
        self
    }
}
