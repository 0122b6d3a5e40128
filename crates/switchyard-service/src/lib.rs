//! Switchyard Service - Rule Administration and Routing
//!
//! This crate wires rule storage to its callers:
//! - Admin: CRUD facade that emits audit events after each mutation
//! - Audit: Audit event types and sinks (tracing, broadcast, JSON-lines file)
//! - Router: Store-backed model selection with default fallback

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod admin;
pub mod audit;
pub mod error;
pub mod router;

pub use admin::RuleAdmin;
pub use audit::{
    AuditAction, AuditEvent, AuditSeverity, AuditSink, BroadcastAuditSink, FileAuditSink,
    NoopAuditSink, TracingAuditSink,
};
pub use error::{Error, Result};
pub use router::{DecisionSource, ModelRouter, RoutingDecision};
