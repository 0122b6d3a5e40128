//! Rule management commands

use super::print_json;
use anyhow::{Context, Result};
use clap::Args;
use switchyard_core::{CostSensitivity, NewRule, RuleConditions, RulePatch, TokenRange};
use switchyard_service::RuleAdmin;
use uuid::Uuid;

/// Condition flags shared by `create` and `update`
#[derive(Args, Debug, Default)]
pub struct ConditionArgs {
    /// Minimum token count (inclusive)
    #[arg(long)]
    pub min_tokens: Option<u64>,
    /// Maximum token count (inclusive)
    #[arg(long)]
    pub max_tokens: Option<u64>,
    /// Required cost sensitivity (low, medium, high)
    #[arg(long)]
    pub cost: Option<CostSensitivity>,
    /// Allowed feature (repeatable)
    #[arg(long = "feature")]
    pub features: Vec<String>,
    /// Allowed tenant (repeatable)
    #[arg(long = "tenant")]
    pub tenants: Vec<String>,
    /// Response-time target in milliseconds (stored only)
    #[arg(long)]
    pub response_time: Option<u64>,
}

impl ConditionArgs {
    fn is_empty(&self) -> bool {
        self.min_tokens.is_none()
            && self.max_tokens.is_none()
            && self.cost.is_none()
            && self.features.is_empty()
            && self.tenants.is_empty()
            && self.response_time.is_none()
    }

    fn into_conditions(self) -> RuleConditions {
        let token_count = (self.min_tokens.is_some() || self.max_tokens.is_some())
            .then(|| TokenRange::new(self.min_tokens, self.max_tokens));
        RuleConditions {
            token_count,
            cost_sensitivity: self.cost,
            features: (!self.features.is_empty()).then(|| self.features.into_iter().collect()),
            tenants: (!self.tenants.is_empty()).then(|| self.tenants.into_iter().collect()),
            response_time: self.response_time,
        }
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Rule name
    #[arg(long)]
    pub name: String,
    /// Model selected when the rule matches
    #[arg(long)]
    pub model: String,
    /// Evaluation priority (higher first)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub priority: i64,
    /// Create the rule disabled
    #[arg(long)]
    pub disabled: bool,
    /// Advisory fallback model
    #[arg(long)]
    pub fallback: Option<String>,
    #[command(flatten)]
    pub conditions: ConditionArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Rule ID
    pub id: Uuid,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New model selection
    #[arg(long)]
    pub model: Option<String>,
    /// New priority
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i64>,
    /// New fallback model
    #[arg(long, conflicts_with = "clear_fallback")]
    pub fallback: Option<String>,
    /// Remove the fallback model
    #[arg(long)]
    pub clear_fallback: bool,
    /// Replace conditions with the given flags
    #[command(flatten)]
    pub conditions: ConditionArgs,
    /// Replace conditions with an empty set (match everything)
    #[arg(long)]
    pub clear_conditions: bool,
}

impl UpdateArgs {
    fn into_patch(self) -> RulePatch {
        let mut patch = RulePatch::new();
        patch.name = self.name;
        patch.model_selection = self.model;
        patch.priority = self.priority;
        if self.clear_fallback {
            patch.fallback_model = Some(None);
        } else if let Some(fallback) = self.fallback {
            patch.fallback_model = Some(Some(fallback));
        }
        if self.clear_conditions {
            patch.conditions = Some(RuleConditions::any());
        } else if !self.conditions.is_empty() {
            patch.conditions = Some(self.conditions.into_conditions());
        }
        patch
    }
}

pub async fn list(admin: &RuleAdmin) -> Result<()> {
    let rules = admin.list().await.context("Failed to list routing rules")?;
    print_json(&rules)
}

pub async fn show(admin: &RuleAdmin, id: Uuid) -> Result<()> {
    let rule = admin.get(id).await.context("Failed to load routing rule")?;
    print_json(&rule)
}

pub async fn create(admin: &RuleAdmin, args: CreateArgs) -> Result<()> {
    let mut input = NewRule::new(args.name, args.model)
        .with_priority(args.priority)
        .with_enabled(!args.disabled)
        .with_conditions(args.conditions.into_conditions());
    input.fallback_model = args.fallback;

    let rule = admin
        .create(input)
        .await
        .context("Failed to create routing rule")?;
    print_json(&rule)
}

pub async fn update(admin: &RuleAdmin, args: UpdateArgs) -> Result<()> {
    let id = args.id;
    let rule = admin
        .update(id, args.into_patch())
        .await
        .context("Failed to update routing rule")?;
    print_json(&rule)
}

pub async fn set_enabled(admin: &RuleAdmin, id: Uuid, enabled: bool) -> Result<()> {
    let rule = admin
        .set_enabled(id, enabled)
        .await
        .context("Failed to change routing rule state")?;
    print_json(&rule)
}

pub async fn delete(admin: &RuleAdmin, id: Uuid) -> Result<()> {
    admin
        .delete(id)
        .await
        .context("Failed to delete routing rule")?;
    print_json(&serde_json::json!({ "deleted": id }))
}
