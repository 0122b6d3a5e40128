//! SqliteRuleStore - SQLite-based rule storage

use super::helpers::{conditions_to_json, row_to_rule};
use super::traits::RuleStore;
use crate::error::{Error, Result};
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::Path;
use switchyard_core::{NewRule, RoutingRule, RulePatch};
use tracing::{debug, info, instrument};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, priority, enabled, conditions,
           model_selection, fallback_model, created_at, updated_at
    FROM routing_rules
"#;

/// Rule store persisting routing rules to SQLite
#[derive(Clone)]
pub struct SqliteRuleStore {
    pool: SqlitePool,
}

impl SqliteRuleStore {
    /// Create a new rule store with the given connection pool.
    ///
    /// The pool's database must already carry the schema; see [`Self::from_path`].
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new rule store from a database path
    ///
    /// This will create the database file if it doesn't exist and run migrations.
    pub async fn from_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Database(format!("failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        let store = Self { pool };
        store.run_migrations().await?;

        info!("SQLite rule store initialized at {}", db_path.display());
        Ok(store)
    }

    /// Create a new in-memory rule store (for testing)
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        let store = Self { pool };
        store.run_migrations().await?;

        debug!("In-memory SQLite rule store initialized");
        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS routing_rules (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                priority INTEGER NOT NULL DEFAULT 1,
                enabled INTEGER NOT NULL DEFAULT 1,
                conditions TEXT NOT NULL DEFAULT '{}',
                model_selection TEXT NOT NULL,
                fallback_model TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_routing_rules_order
            ON routing_rules(priority DESC, name ASC, id ASC)
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        debug!("Database migrations completed");
        Ok(())
    }

    /// Get a reference to the underlying connection pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch(&self, id: Uuid) -> Result<RoutingRule> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        row_to_rule(row)
    }
}

#[async_trait::async_trait]
impl RuleStore for SqliteRuleStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<RoutingRule>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} ORDER BY priority DESC, name ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(row_to_rule).collect()
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<RoutingRule> {
        self.fetch(id).await
    }

    #[instrument(skip(self, input), fields(rule = %input.name))]
    async fn create(&self, input: NewRule) -> Result<RoutingRule> {
        let rule = RoutingRule::from_new(input, Uuid::new_v4(), Utc::now())?;

        sqlx::query(
            r#"
            INSERT INTO routing_rules (
                id, name, priority, enabled, conditions,
                model_selection, fallback_model, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(rule.id.to_string())
        .bind(&rule.name)
        .bind(rule.priority)
        .bind(rule.enabled)
        .bind(conditions_to_json(&rule.conditions)?)
        .bind(&rule.model_selection)
        .bind(&rule.fallback_model)
        .bind(rule.created_at.to_rfc3339())
        .bind(rule.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        debug!("Created routing rule {}", rule.id);
        Ok(rule)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: RulePatch) -> Result<RoutingRule> {
        let mut rule = self.fetch(id).await?;
        let changed = patch.apply(&mut rule)?;
        if changed.is_empty() {
            return Ok(rule);
        }
        rule.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE routing_rules
            SET name = ?2, priority = ?3, enabled = ?4, conditions = ?5,
                model_selection = ?6, fallback_model = ?7, updated_at = ?8
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .bind(&rule.name)
        .bind(rule.priority)
        .bind(rule.enabled)
        .bind(conditions_to_json(&rule.conditions)?)
        .bind(&rule.model_selection)
        .bind(&rule.fallback_model)
        .bind(rule.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        // Deleted between the read and the write
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        debug!(?changed, "Updated routing rule {}", id);
        Ok(rule)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM routing_rules WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        debug!("Deleted routing rule {}", id);
        Ok(())
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
