//! Shared issue fixtures for the integration specs.

use driftwell_tools::models::{Connection, Issue, ParentRef, StateRef};

/// Build a minimal issue with the given identifier and title.
pub fn issue(identifier: &str, title: &str) -> Issue {
    Issue {
        id: format!("api-{}", identifier),
        identifier: identifier.to_string(),
        title: title.to_string(),
        description: None,
        state: Some(StateRef {
            id: None,
            name: "Backlog".to_string(),
            state_type: Some("backlog".to_string()),
        }),
        priority: None,
        assignee: None,
        creator: None,
        parent: None,
        children: Connection { nodes: vec![] },
        created_at: None,
        updated_at: None,
    }
}

/// Build an issue whose parent is `(parent_identifier, parent_title)`.
pub fn child_issue(
    identifier: &str,
    title: &str,
    parent_identifier: &str,
    parent_title: &str,
) -> Issue {
    let mut issue = issue(identifier, title);
    issue.parent = Some(ParentRef {
        id: Some(format!("api-{}", parent_identifier)),
        identifier: parent_identifier.to_string(),
        title: parent_title.to_string(),
    });
    issue
}
