mod common;

use common::{child_issue, issue};
use driftwell_tools::export::grouping::{self, dedupe_sorted};
use driftwell_tools::models::{ChildRef, Issue};

fn identifiers(issues: &[&Issue]) -> Vec<String> {
    issues.iter().map(|i| i.identifier.clone()).collect()
}

#[test]
fn end_to_end_fixture_yields_one_component_and_one_residual() {
    let issues = vec![
        issue("DRF-225", "Component 1: Setup"),
        issue("DRF-226", "Component 1 - sub task"),
        issue("DRF-300", "Unrelated task"),
    ];

    let grouping = grouping::group(&issues);

    assert_eq!(grouping.components.len(), 1);
    let component = &grouping.components[0];
    assert_eq!(component.root.identifier, "DRF-225");
    assert_eq!(identifiers(&component.tasks), vec!["DRF-226"]);
    assert_eq!(identifiers(&grouping.other), vec!["DRF-300"]);
}

#[test]
fn every_issue_appears_exactly_once() {
    let issues = vec![
        issue("DRF-225", "Component 1: Setup"),
        issue("DRF-230", "Component 2: Sync"),
        child_issue("DRF-226", "Polish onboarding", "DRF-225", "Component 1: Setup"),
        child_issue("DRF-231", "Harden retries", "DRF-230", "Component 2: Sync"),
        // Mentions both components; must be claimed by the first only.
        issue("DRF-232", "Component 1 and Component 2 glue"),
        issue("DRF-300", "Standalone chore"),
    ];

    let grouping = grouping::group(&issues);

    let mut seen: Vec<String> = Vec::new();
    for component in &grouping.components {
        seen.push(component.root.identifier.clone());
        seen.extend(identifiers(&component.tasks));
    }
    seen.extend(identifiers(&grouping.other));
    seen.sort();

    let mut expected: Vec<String> = issues.iter().map(|i| i.identifier.clone()).collect();
    expected.sort();
    assert_eq!(seen, expected);

    // The doubly-matching issue landed under Component 1.
    assert!(identifiers(&grouping.components[0].tasks).contains(&"DRF-232".to_string()));
    assert!(!identifiers(&grouping.components[1].tasks).contains(&"DRF-232".to_string()));
}

#[test]
fn parent_link_counts_as_membership() {
    let issues = vec![
        issue("DRF-225", "Component 1: Setup"),
        child_issue("DRF-227", "Wire the settings screen", "DRF-225", "Component 1: Setup"),
    ];

    let grouping = grouping::group(&issues);
    assert_eq!(identifiers(&grouping.components[0].tasks), vec!["DRF-227"]);
    assert!(grouping.other.is_empty());
}

#[test]
fn explicit_child_links_are_merged_in() {
    let mut root = issue("DRF-225", "Component 1: Setup");
    root.children.nodes.push(ChildRef {
        id: None,
        identifier: "DRF-240".to_string(),
        title: "Telemetry spike".to_string(),
    });
    let issues = vec![root, issue("DRF-240", "Telemetry spike")];

    let grouping = grouping::group(&issues);
    assert_eq!(identifiers(&grouping.components[0].tasks), vec!["DRF-240"]);
    assert!(grouping.other.is_empty());
}

#[test]
fn tasks_are_deduplicated_and_sorted() {
    // DRF-226 matches by title AND is an explicit child; it must appear once.
    let mut root = issue("DRF-225", "Component 1: Setup");
    root.children.nodes.push(ChildRef {
        id: None,
        identifier: "DRF-226".to_string(),
        title: "Component 1 - sub task".to_string(),
    });
    let issues = vec![
        root,
        issue("DRF-229", "Component 1 cleanup"),
        issue("DRF-226", "Component 1 - sub task"),
    ];

    let grouping = grouping::group(&issues);
    assert_eq!(
        identifiers(&grouping.components[0].tasks),
        vec!["DRF-226", "DRF-229"]
    );
}

#[test]
fn dedupe_sorted_is_idempotent() {
    let a = issue("DRF-3", "c");
    let b = issue("DRF-1", "a");
    let c = issue("DRF-2", "b");
    let duplicated = vec![&a, &b, &c, &a, &b];

    let once = dedupe_sorted(duplicated);
    let twice = dedupe_sorted(once.clone());

    assert_eq!(identifiers(&once), vec!["DRF-1", "DRF-2", "DRF-3"]);
    assert_eq!(identifiers(&once), identifiers(&twice));
}

#[test]
fn component_without_matches_is_a_valid_silent_outcome() {
    let issues = vec![
        issue("DRF-225", "Component 1: Setup"),
        issue("DRF-300", "Standalone chore"),
    ];

    let grouping = grouping::group(&issues);
    assert!(grouping.components[0].tasks.is_empty());
    assert_eq!(identifiers(&grouping.other), vec!["DRF-300"]);
}

#[test]
fn titles_outside_the_component_convention_anchor_nothing() {
    let issues = vec![
        issue("DRF-400", "Infra: Cleanup"),
        issue("DRF-401", "Component 7 polish pass"),
    ];

    // A colon title without a Component token, and a Component token without
    // the colon form: neither anchors a component.
    let grouping = grouping::group(&issues);
    assert!(grouping.components.is_empty());
    assert_eq!(identifiers(&grouping.other), vec!["DRF-400", "DRF-401"]);
}
