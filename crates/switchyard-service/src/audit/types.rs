//! Audit event definitions

use chrono::{DateTime, Utc};
use serde::Serialize;
use switchyard_core::RoutingRule;
use uuid::Uuid;

/// Kind of rule mutation being audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A rule was created
    RuleCreated,
    /// A rule was changed
    RuleUpdated,
    /// A rule was permanently removed
    RuleDeleted,
}

impl AuditAction {
    /// Get the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RuleCreated => "rule_created",
            Self::RuleUpdated => "rule_updated",
            Self::RuleDeleted => "rule_deleted",
        }
    }

    /// Default severity for this action
    #[must_use]
    pub fn severity(&self) -> AuditSeverity {
        match self {
            Self::RuleCreated | Self::RuleUpdated => AuditSeverity::Info,
            Self::RuleDeleted => AuditSeverity::Warning,
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    /// Routine change
    Info,
    /// Destructive change
    Warning,
}

/// A single audited rule mutation.
///
/// Events carry identifiers and field names only, never condition contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    /// What happened
    #[serde(rename = "type")]
    pub action: AuditAction,
    /// Affected rule
    pub rule_id: Uuid,
    /// Rule name (set on creation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    /// Names of changed fields (set on update)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,
    /// Severity
    pub severity: AuditSeverity,
    /// When the event was produced
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    fn new(action: AuditAction, rule_id: Uuid) -> Self {
        Self {
            action,
            rule_id,
            rule_name: None,
            changes: Vec::new(),
            severity: action.severity(),
            timestamp: Utc::now(),
        }
    }

    /// Event for a newly created rule
    #[must_use]
    pub fn rule_created(rule: &RoutingRule) -> Self {
        let mut event = Self::new(AuditAction::RuleCreated, rule.id);
        event.rule_name = Some(rule.name.clone());
        event
    }

    /// Event for an updated rule
    #[must_use]
    pub fn rule_updated<I, S>(rule_id: Uuid, changes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut event = Self::new(AuditAction::RuleUpdated, rule_id);
        event.changes = changes.into_iter().map(Into::into).collect();
        event
    }

    /// Event for a deleted rule
    #[must_use]
    pub fn rule_deleted(rule_id: Uuid) -> Self {
        Self::new(AuditAction::RuleDeleted, rule_id)
    }
}
