//! Service wiring
//!
//! Builds the rule store, audit sink, admin facade and router from
//! configuration.

use crate::settings::{AppConfig, AuditSinkKind, StoreBackend};
use anyhow::{Context, Result};
use std::sync::Arc;
use switchyard_core::RuleMatcher;
use switchyard_service::{
    AuditSink, BroadcastAuditSink, FileAuditSink, ModelRouter, NoopAuditSink, RuleAdmin,
    TracingAuditSink,
};
use switchyard_store::{MemoryRuleStore, RuleStore, SqliteRuleStore};
use tracing::info;

/// Wired services
pub struct Services {
    pub admin: RuleAdmin,
    pub router: ModelRouter,
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn RuleStore>> {
    let store: Arc<dyn RuleStore> = match config.store.backend {
        StoreBackend::Sqlite => {
            let path = config.store.db_path();
            Arc::new(
                SqliteRuleStore::from_path(&path)
                    .await
                    .with_context(|| format!("Failed to open rule store at {}", path.display()))?,
            )
        }
        StoreBackend::Memory => Arc::new(MemoryRuleStore::new()),
    };
    Ok(store)
}

async fn build_audit_sink(config: &AppConfig) -> Result<Arc<dyn AuditSink>> {
    let sink: Arc<dyn AuditSink> = match config.audit.sink {
        AuditSinkKind::Tracing => Arc::new(TracingAuditSink),
        AuditSinkKind::Broadcast => Arc::new(BroadcastAuditSink::new(config.audit.capacity)),
        AuditSinkKind::File => {
            let path = config.audit.log_path();
            Arc::new(
                FileAuditSink::open(&path)
                    .await
                    .with_context(|| format!("Failed to open audit log at {}", path.display()))?,
            )
        }
        AuditSinkKind::None => Arc::new(NoopAuditSink),
    };
    Ok(sink)
}

/// Build all services from configuration
pub async fn init(config: &AppConfig) -> Result<Services> {
    let store = build_store(config).await?;
    let audit = build_audit_sink(config).await?;
    info!(
        store = store.name(),
        audit = audit.name(),
        default_model = %config.routing.default_model,
        "Switchyard services initialized"
    );

    let matcher = RuleMatcher::new(config.routing.default_model.clone());
    Ok(Services {
        admin: RuleAdmin::new(store.clone(), audit),
        router: ModelRouter::new(store, matcher),
    })
}
