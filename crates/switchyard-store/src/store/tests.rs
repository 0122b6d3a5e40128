//! Tests for store module

use super::*;
use crate::error::Error;
use switchyard_core::{sort_rules, CostSensitivity, NewRule, RulePatch, RuleConditions, TokenRange};
use uuid::Uuid;

fn sample_conditions() -> RuleConditions {
    RuleConditions::any()
        .with_token_count(TokenRange::between(100, 4000))
        .with_cost_sensitivity(CostSensitivity::Medium)
        .with_features(["chat", "assistant"])
        .with_tenants(["school-1"])
        .with_response_time(250)
}

async fn check_create_and_get(store: &dyn RuleStore) {
    let created = store
        .create(
            NewRule::new("Large chats", "gpt-4")
                .with_priority(5)
                .with_conditions(sample_conditions())
                .with_fallback_model("gpt-3.5-turbo"),
        )
        .await
        .unwrap();

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.conditions, sample_conditions());
    assert_eq!(fetched.fallback_model.as_deref(), Some("gpt-3.5-turbo"));
}

async fn check_list_ordering(store: &dyn RuleStore) {
    for (name, priority) in [("beta", 1), ("alpha", 1), ("top", 10), ("mid", 5)] {
        store
            .create(NewRule::new(name, "m").with_priority(priority))
            .await
            .unwrap();
    }

    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["top", "mid", "alpha", "beta"]);
}

async fn check_id_tie_break(store: &dyn RuleStore) {
    let mut created = Vec::new();
    for _ in 0..6 {
        created.push(
            store
                .create(NewRule::new("same", "m").with_priority(3))
                .await
                .unwrap(),
        );
    }
    sort_rules(&mut created);

    let listed: Vec<Uuid> = store.list().await.unwrap().iter().map(|r| r.id).collect();
    let expected: Vec<Uuid> = created.iter().map(|r| r.id).collect();
    assert_eq!(listed, expected);
}

async fn check_validation(store: &dyn RuleStore) {
    let err = store.create(NewRule::new("", "gpt-4")).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(store.list().await.unwrap().is_empty());

    let rule = store.create(NewRule::new("ok", "gpt-4")).await.unwrap();
    let err = store
        .update(rule.id, RulePatch::new().name("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(store.get(rule.id).await.unwrap().name, "ok");
}

async fn check_update(store: &dyn RuleStore) {
    let rule = store
        .create(NewRule::new("rule", "gpt-4").with_priority(2))
        .await
        .unwrap();

    let unchanged = store.update(rule.id, RulePatch::new()).await.unwrap();
    assert_eq!(unchanged, rule);
    assert_eq!(store.get(rule.id).await.unwrap(), rule);

    let updated = store
        .update(rule.id, RulePatch::new().enabled(false).priority(8))
        .await
        .unwrap();
    assert!(!updated.enabled);
    assert_eq!(updated.priority, 8);
    assert_eq!(updated.name, "rule");
    assert_eq!(updated.model_selection, "gpt-4");
    assert_eq!(updated.created_at, rule.created_at);
    assert!(updated.updated_at >= rule.updated_at);
    assert_eq!(store.get(rule.id).await.unwrap(), updated);

    let err = store
        .update(Uuid::new_v4(), RulePatch::new().priority(1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

async fn check_delete(store: &dyn RuleStore) {
    let rule = store.create(NewRule::new("gone", "gpt-4")).await.unwrap();
    store.delete(rule.id).await.unwrap();

    assert!(matches!(store.get(rule.id).await, Err(Error::NotFound(_))));
    assert!(matches!(store.delete(rule.id).await, Err(Error::NotFound(_))));
    assert!(store.list().await.unwrap().is_empty());
}

#[test]
fn test_default_data_dir() {
    let dir = default_data_dir();
    assert!(dir.to_string_lossy().contains("switchyard"));
    assert!(default_db_path().ends_with("switchyard.db"));
}

#[tokio::test]
async fn test_sqlite_store() {
    let store = SqliteRuleStore::in_memory().await.unwrap();
    assert_eq!(store.name(), "sqlite");
    check_create_and_get(&store).await;

    let store = SqliteRuleStore::in_memory().await.unwrap();
    check_list_ordering(&store).await;

    let store = SqliteRuleStore::in_memory().await.unwrap();
    check_id_tie_break(&store).await;

    let store = SqliteRuleStore::in_memory().await.unwrap();
    check_validation(&store).await;

    let store = SqliteRuleStore::in_memory().await.unwrap();
    check_update(&store).await;

    let store = SqliteRuleStore::in_memory().await.unwrap();
    check_delete(&store).await;
}

#[tokio::test]
async fn test_memory_store() {
    let store = MemoryRuleStore::new();
    assert_eq!(store.name(), "memory");
    assert!(store.is_empty().await);
    check_create_and_get(&store).await;
    assert_eq!(store.len().await, 1);

    check_list_ordering(&MemoryRuleStore::new()).await;
    check_id_tie_break(&MemoryRuleStore::new()).await;
    check_validation(&MemoryRuleStore::new()).await;
    check_update(&MemoryRuleStore::new()).await;
    check_delete(&MemoryRuleStore::new()).await;
}

#[tokio::test]
async fn test_sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("rules.db");

    let id = {
        let store = SqliteRuleStore::from_path(&path).await.unwrap();
        let rule = store
            .create(NewRule::new("persisted", "claude-3-opus").with_conditions(sample_conditions()))
            .await
            .unwrap();
        store.pool().close().await;
        rule.id
    };

    let store = SqliteRuleStore::from_path(&path).await.unwrap();
    let rule = store.get(id).await.unwrap();
    assert_eq!(rule.name, "persisted");
    assert_eq!(rule.conditions, sample_conditions());
}

#[test]
fn test_memory_store_without_runtime() {
    let store = MemoryRuleStore::new();
    let rule = tokio_test::block_on(store.create(NewRule::new("sync", "gpt-4"))).unwrap();
    let rules = tokio_test::block_on(store.list()).unwrap();
    assert_eq!(rules, vec![rule]);
}
