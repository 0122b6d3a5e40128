//! Tests for matcher module

use super::*;
use crate::context::RequestContext;
use crate::rule::{CostSensitivity, NewRule, RoutingRule, RuleConditions, TokenRange};
use chrono::Utc;
use uuid::Uuid;

fn rule(name: &str, priority: i64, conditions: RuleConditions, model: &str) -> RoutingRule {
    let input = NewRule::new(name, model)
        .with_priority(priority)
        .with_conditions(conditions);
    RoutingRule::from_new(input, Uuid::new_v4(), Utc::now()).unwrap()
}

fn chat(tokens: u64) -> RequestContext {
    RequestContext::new(tokens, "chat")
}

#[test]
fn test_empty_rules_return_default() {
    let matcher = RuleMatcher::new("fallback-model");
    assert_eq!(matcher.select_model(&[], &chat(10)), "fallback-model");
    assert_eq!(
        matcher.select_model(&[], &chat(0).with_tenant("t1")),
        "fallback-model"
    );
}

#[test]
fn test_default_matcher_uses_builtin_default() {
    let matcher = RuleMatcher::default();
    assert_eq!(matcher.default_model(), DEFAULT_MODEL);
    assert_eq!(matcher.select_model(&[], &chat(1)), "gpt-3.5-turbo");
}

#[test]
fn test_big_model_scenario() {
    let mut rules = vec![
        rule(
            "large prompts",
            10,
            RuleConditions::any().with_token_count(TokenRange::at_least(1000)),
            "big-model",
        ),
        rule("catch-all", 1, RuleConditions::any(), "default-model"),
    ];
    sort_rules(&mut rules);
    let matcher = RuleMatcher::default();

    assert_eq!(matcher.select_model(&rules, &chat(1500)), "big-model");
    assert_eq!(matcher.select_model(&rules, &chat(500)), "default-model");
}

#[test]
fn test_disabled_rules_never_match() {
    let mut rules = vec![
        rule("a", 5, RuleConditions::any(), "model-a"),
        rule("b", 3, RuleConditions::any(), "model-b"),
    ];
    for r in &mut rules {
        r.enabled = false;
    }
    let matcher = RuleMatcher::new("the-default");

    for ctx in [
        chat(0),
        chat(99_999).with_tenant("t1"),
        RequestContext::new(5, "assistant").with_cost_sensitivity(CostSensitivity::High),
    ] {
        assert_eq!(matcher.select_model(&rules, &ctx), "the-default");
    }
}

#[test]
fn test_empty_conditions_match_any_context() {
    let rules = vec![rule("all", 1, RuleConditions::any(), "all-model")];
    let matcher = RuleMatcher::default();

    for ctx in [
        chat(0),
        chat(u64::MAX),
        RequestContext::new(7, "finetuning").with_tenant("school-9"),
        RequestContext::new(7, "").with_cost_sensitivity(CostSensitivity::Low),
    ] {
        assert_eq!(matcher.select_model(&rules, &ctx), "all-model");
    }
}

#[test]
fn test_response_time_is_not_evaluated() {
    let rules = vec![rule(
        "fast",
        1,
        RuleConditions::any().with_response_time(50),
        "fast-model",
    )];
    assert_eq!(
        RuleMatcher::default().select_model(&rules, &chat(10)),
        "fast-model"
    );
}

#[test]
fn test_token_range_boundaries_inclusive() {
    let rules = vec![rule(
        "mid",
        1,
        RuleConditions::any().with_token_count(TokenRange::between(100, 200)),
        "mid-model",
    )];
    let matcher = RuleMatcher::new("none");

    assert_eq!(matcher.select_model(&rules, &chat(99)), "none");
    assert_eq!(matcher.select_model(&rules, &chat(100)), "mid-model");
    assert_eq!(matcher.select_model(&rules, &chat(150)), "mid-model");
    assert_eq!(matcher.select_model(&rules, &chat(200)), "mid-model");
    assert_eq!(matcher.select_model(&rules, &chat(201)), "none");
}

#[test]
fn test_cost_sensitivity_requires_context_value() {
    let rules = vec![rule(
        "cheap",
        1,
        RuleConditions::any().with_cost_sensitivity(CostSensitivity::High),
        "cheap-model",
    )];
    let matcher = RuleMatcher::new("none");

    assert_eq!(matcher.select_model(&rules, &chat(10)), "none");
    assert_eq!(
        matcher.select_model(
            &rules,
            &chat(10).with_cost_sensitivity(CostSensitivity::Medium)
        ),
        "none"
    );
    assert_eq!(
        matcher.select_model(&rules, &chat(10).with_cost_sensitivity(CostSensitivity::High)),
        "cheap-model"
    );
}

#[test]
fn test_features_membership() {
    let rules = vec![rule(
        "tools",
        1,
        RuleConditions::any().with_features(["playground", "assistant"]),
        "tool-model",
    )];
    let matcher = RuleMatcher::new("none");

    assert_eq!(matcher.select_model(&rules, &chat(10)), "none");
    assert_eq!(
        matcher.select_model(&rules, &RequestContext::new(10, "assistant")),
        "tool-model"
    );
}

#[test]
fn test_tenants_require_present_member() {
    let rules = vec![rule(
        "vip",
        1,
        RuleConditions::any().with_tenants(["t1", "t2"]),
        "vip-model",
    )];
    let matcher = RuleMatcher::new("none");

    assert_eq!(matcher.select_model(&rules, &chat(10)), "none");
    assert_eq!(matcher.select_model(&rules, &chat(10).with_tenant("t3")), "none");
    assert_eq!(
        matcher.select_model(&rules, &chat(10).with_tenant("t2")),
        "vip-model"
    );
}

#[test]
fn test_conditions_are_conjunctive() {
    let conditions = RuleConditions::any()
        .with_token_count(TokenRange::at_most(1000))
        .with_features(["chat"])
        .with_tenants(["t1"]);
    let rules = vec![rule("combo", 1, conditions, "combo-model")];
    let matcher = RuleMatcher::new("none");

    assert_eq!(
        matcher.select_model(&rules, &chat(500).with_tenant("t1")),
        "combo-model"
    );
    assert_eq!(matcher.select_model(&rules, &chat(1500).with_tenant("t1")), "none");
    assert_eq!(
        matcher.select_model(&rules, &RequestContext::new(500, "assistant").with_tenant("t1")),
        "none"
    );
    assert_eq!(matcher.select_model(&rules, &chat(500)), "none");
}

#[test]
fn test_higher_priority_wins() {
    let mut rules = vec![
        rule("five", 5, RuleConditions::any(), "model-5"),
        rule("ten", 10, RuleConditions::any(), "model-10"),
    ];
    sort_rules(&mut rules);
    assert_eq!(
        RuleMatcher::default().select_model(&rules, &chat(1)),
        "model-10"
    );
}

#[test]
fn test_priority_applied_to_unsorted_input() {
    let rules = vec![
        rule("five", 5, RuleConditions::any(), "model-5"),
        rule("ten", 10, RuleConditions::any(), "model-10"),
    ];
    let matcher = RuleMatcher::default();

    assert_eq!(matcher.select_model(&rules, &chat(1)), "model-10");
    assert_eq!(matcher.first_match(&rules, &chat(1)).unwrap().name, "ten");
}

#[test]
fn test_unsorted_ties_use_store_ordering() {
    let rules = vec![
        rule("beta", 3, RuleConditions::any(), "b"),
        rule("low", 1, RuleConditions::any(), "l"),
        rule("alpha", 3, RuleConditions::any(), "a"),
    ];
    assert_eq!(RuleMatcher::default().select_model(&rules, &chat(1)), "a");
}

#[test]
fn test_disabled_high_priority_falls_through() {
    let mut rules = vec![
        rule("ten", 10, RuleConditions::any(), "model-10"),
        rule("five", 5, RuleConditions::any(), "model-5"),
    ];
    rules[0].enabled = false;
    let matcher = RuleMatcher::default();

    let found = matcher.first_match(&rules, &chat(1)).unwrap();
    assert_eq!(found.name, "five");
    assert!(!matcher.matches(&rules[0], &chat(1)));
}

#[test]
fn test_sort_ties_broken_by_name() {
    let mut rules = vec![
        rule("beta", 1, RuleConditions::any(), "b"),
        rule("alpha", 1, RuleConditions::any(), "a"),
        rule("gamma", 2, RuleConditions::any(), "g"),
    ];
    sort_rules(&mut rules);
    let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["gamma", "alpha", "beta"]);
    assert_eq!(RuleMatcher::default().select_model(&rules, &chat(1)), "g");
}

#[test]
fn test_empty_feature_and_tenant_sets_match_any() {
    let conditions = RuleConditions::any()
        .with_features(Vec::<String>::new())
        .with_tenants(Vec::<String>::new());
    assert!(conditions.is_empty());

    let rules = vec![rule("blank form", 1, conditions, "form-model")];
    let matcher = RuleMatcher::new("default");

    assert_eq!(matcher.select_model(&rules, &chat(1)), "form-model");
    assert_eq!(
        matcher.select_model(&rules, &chat(1).with_tenant("school-9")),
        "form-model"
    );
}

#[test]
fn test_empty_sets_deserialize_as_unconstrained() {
    let conditions: RuleConditions =
        serde_json::from_str(r#"{"features": [], "tenants": []}"#).unwrap();
    assert!(conditions_match(&conditions, &chat(42)));

    let conditions: RuleConditions =
        serde_json::from_str(r#"{"features": [], "tenants": ["t1"]}"#).unwrap();
    assert!(!conditions_match(&conditions, &chat(42)));
    assert!(conditions_match(&conditions, &chat(42).with_tenant("t1")));
}
