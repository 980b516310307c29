mod common;

use common::{child_issue, issue};
use driftwell_tools::assign::{resolve_planned, COMPONENT_IDENTIFIER, PLAN_IDENTIFIERS};

#[test]
fn component_identifier_resolves_to_itself() {
    let issues = vec![
        issue("DRF-225", "Component 1: Setup"),
        issue("DRF-300", "Unrelated task"),
    ];

    let resolved = resolve_planned(&issues, COMPONENT_IDENTIFIER).expect("component");
    assert_eq!(resolved.identifier, "DRF-225");
}

#[test]
fn planned_task_requires_the_component_parent() {
    let issues = vec![
        issue("DRF-225", "Component 1: Setup"),
        child_issue("DRF-228", "Auth and security", "DRF-225", "Component 1: Setup"),
        // Same identifier shape, wrong parent.
        child_issue("DRF-227", "Backend infra", "DRF-230", "Component 2: Sync"),
        // No parent at all.
        issue("DRF-229", "Notifications"),
    ];

    assert!(resolve_planned(&issues, "DRF-228").is_some());
    assert!(resolve_planned(&issues, "DRF-227").is_none());
    assert!(resolve_planned(&issues, "DRF-229").is_none());
}

#[test]
fn missing_identifier_resolves_to_none() {
    let issues = vec![issue("DRF-225", "Component 1: Setup")];
    assert!(resolve_planned(&issues, "DRF-226").is_none());
}

#[test]
fn plan_starts_with_the_component() {
    assert_eq!(PLAN_IDENTIFIERS[0], COMPONENT_IDENTIFIER);
    assert_eq!(PLAN_IDENTIFIERS.len(), 5);
}
