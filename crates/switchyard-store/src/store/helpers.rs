//! Helper functions for store module

use crate::error::Error;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use switchyard_core::{RoutingRule, RuleConditions};
use uuid::Uuid;

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Serialization(format!("invalid timestamp: {e}")))
}

/// Convert a SQLite row to a RoutingRule
pub(crate) fn row_to_rule(row: SqliteRow) -> Result<RoutingRule, Error> {
    let id_str: String = row.get("id");
    let conditions_str: String = row.get("conditions");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    let id =
        Uuid::parse_str(&id_str).map_err(|e| Error::Serialization(format!("invalid uuid: {e}")))?;
    let conditions: RuleConditions = serde_json::from_str(&conditions_str)
        .map_err(|e| Error::Serialization(format!("invalid conditions: {e}")))?;

    Ok(RoutingRule {
        id,
        name: row.get("name"),
        priority: row.get("priority"),
        enabled: row.get("enabled"),
        conditions,
        model_selection: row.get("model_selection"),
        fallback_model: row.get("fallback_model"),
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
    })
}

/// Serialize conditions for the `conditions` column
pub(crate) fn conditions_to_json(conditions: &RuleConditions) -> Result<String, Error> {
    serde_json::to_string(conditions).map_err(|e| Error::Serialization(e.to_string()))
}

/// Get the default data directory for Switchyard
pub fn default_data_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".switchyard"))
        .unwrap_or_else(|| std::path::PathBuf::from(".switchyard"))
}

/// Get the default database path
pub fn default_db_path() -> std::path::PathBuf {
    default_data_dir().join("switchyard.db")
}
