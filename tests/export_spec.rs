mod common;

use chrono::{TimeZone, Utc};
use common::{child_issue, issue};
use driftwell_tools::export::document::build_document;
use driftwell_tools::export::{grouping, markdown};
use driftwell_tools::models::{Connection, Person, Project};

fn fixture_project() -> Project {
    let mut sub_task = child_issue(
        "DRF-226",
        "Component 1 - sub task",
        "DRF-225",
        "Component 1: Setup",
    );
    sub_task.priority = Some(2.0);
    sub_task.assignee = Some(Person {
        id: Some("u1".to_string()),
        name: "Ada".to_string(),
        email: Some("ada@driftwell.app".to_string()),
    });

    Project {
        id: "p1".to_string(),
        name: "Driftwell scope".to_string(),
        description: Some("Scope planning".to_string()),
        state: Some("started".to_string()),
        progress: Some(0.25),
        issues: Connection {
            nodes: vec![
                issue("DRF-225", "Component 1: Setup"),
                sub_task,
                issue("DRF-300", "Unrelated task"),
            ],
        },
    }
}

#[test]
fn document_mirrors_the_grouping() {
    let project = fixture_project();
    let grouping = grouping::group(&project.issues.nodes);
    let fetched_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();

    let doc = build_document(&project, &grouping, fetched_at);

    assert_eq!(doc.project.name, "Driftwell scope");
    assert_eq!(doc.project.total_issues, 3);
    assert_eq!(doc.project.fetched_at, fetched_at);

    assert_eq!(doc.components.len(), 1);
    let component = &doc.components[0];
    assert_eq!(component.component.identifier, "DRF-225");
    assert_eq!(component.component.task_count, 1);

    let task = &component.tasks[0];
    assert_eq!(task.identifier, "DRF-226");
    assert_eq!(task.parent.as_ref().unwrap().identifier, "DRF-225");
    assert_eq!(task.assignee.as_ref().unwrap().name, "Ada");

    assert_eq!(doc.other_tasks.len(), 1);
    assert_eq!(doc.other_tasks[0].identifier, "DRF-300");
}

#[test]
fn absent_fields_serialize_as_null() {
    let project = fixture_project();
    let grouping = grouping::group(&project.issues.nodes);
    let doc = build_document(&project, &grouping, Utc::now());

    let value = serde_json::to_value(&doc).unwrap();
    let other = &value["other_tasks"][0];
    assert!(other["assignee"].is_null());
    assert!(other["description"].is_null());
    assert_eq!(other["state"]["name"], "Backlog");
}

#[test]
fn json_round_trips_through_serde() {
    let project = fixture_project();
    let grouping = grouping::group(&project.issues.nodes);
    let doc = build_document(&project, &grouping, Utc::now());

    let json = serde_json::to_string_pretty(&doc).unwrap();
    let parsed: driftwell_tools::export::document::ExportDocument =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.components[0].tasks[0].identifier, "DRF-226");
}

#[test]
fn markdown_summary_covers_components_and_residual() {
    let project = fixture_project();
    let grouping = grouping::group(&project.issues.nodes);
    let fetched_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    let doc = build_document(&project, &grouping, fetched_at);

    let md = markdown::render(&doc);
    assert!(md.contains("### DRF-225: Component 1: Setup"));
    assert!(md.contains("- **DRF-226** - Component 1 - sub task"));
    assert!(md.contains("  - Priority: 2\n"));
    assert!(md.contains("## Other Tasks (Not in Components)"));
    assert!(md.contains("- **DRF-300** - Unrelated task"));
}
