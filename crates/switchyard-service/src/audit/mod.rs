//! Audit - rule change events
//!
//! RuleAdmin emits one event after each successful mutation. Sinks are
//! best-effort: a failing sink is logged by the caller and never undoes the
//! mutation that produced the event.

pub mod sinks;
pub mod types;

pub use sinks::{AuditSink, BroadcastAuditSink, FileAuditSink, NoopAuditSink, TracingAuditSink};
pub use types::{AuditAction, AuditEvent, AuditSeverity};
