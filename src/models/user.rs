use serde::{Deserialize, Serialize};

use super::Connection;

/// The authenticated API user, as returned by the `viewer` query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A person referenced from an issue (assignee or creator).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
}

/// A team, carrying its configured workflow states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub states: Connection<WorkflowState>,
}

/// A named, typed status value configured per team (e.g. "Backlog",
/// "In Progress").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub state_type: String,
}
