use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Connection, Person};

/// A unit of work tracked in Linear.
///
/// `id` is the opaque API identifier used in mutations; `identifier` is the
/// human-facing key (e.g. `DRF-226`), stable and unique within a workspace.
/// Optional fields stay optional all the way to the export: an absent
/// assignee or description degrades to `null`, never to an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub state: Option<StateRef>,
    /// Linear priority ordinal; `0` means "no priority".
    pub priority: Option<f64>,
    pub assignee: Option<Person>,
    pub creator: Option<Person>,
    pub parent: Option<ParentRef>,
    #[serde(default)]
    pub children: Connection<ChildRef>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The workflow state attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRef {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub state_type: Option<String>,
}

/// Back-reference to a parent issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: Option<String>,
    pub identifier: String,
    pub title: String,
}

/// Shallow reference to a child issue, as listed on the parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildRef {
    pub id: Option<String>,
    pub identifier: String,
    pub title: String,
}

/// Result payload of Linear's `issueUpdate` mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueUpdate {
    pub success: bool,
}
