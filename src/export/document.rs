//! Serialized shape of the export document.
//!
//! These types define the JSON contract; the Markdown summary is rendered
//! from the same document. Absent upstream fields serialize as `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::grouping::Grouping;
use crate::models::{Issue, Person, Project};

/// The full export: project metadata, components with their tasks, and the
/// residual task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub project: ProjectMeta,
    pub components: Vec<ComponentExport>,
    pub other_tasks: Vec<TaskSummary>,
}

/// Project-level metadata, stamped with the fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub id: String,
    pub description: Option<String>,
    pub state: Option<String>,
    pub progress: Option<f64>,
    pub total_issues: usize,
    pub fetched_at: DateTime<Utc>,
}

/// One component and its member tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentExport {
    pub component: ComponentMeta,
    pub tasks: Vec<TaskExport>,
}

/// Summary of a component's root issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMeta {
    pub identifier: String,
    pub title: String,
    pub state: Option<String>,
    pub priority: Option<f64>,
    pub task_count: usize,
}

/// Workflow state name and category of an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSummary {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub state_type: Option<String>,
}

/// Assignee or creator reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub email: Option<String>,
}

/// Parent back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentSummary {
    pub identifier: String,
    pub title: String,
}

/// Full per-task record, used inside components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskExport {
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub state: StateSummary,
    pub priority: Option<f64>,
    pub assignee: Option<PersonSummary>,
    pub creator: Option<PersonSummary>,
    pub parent: Option<ParentSummary>,
    pub children_count: usize,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reduced per-task record for issues outside every component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub state: StateSummary,
    pub priority: Option<f64>,
    pub assignee: Option<PersonSummary>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Assemble the export document from a fetched project and its grouping.
pub fn build_document(
    project: &Project,
    grouping: &Grouping<'_>,
    fetched_at: DateTime<Utc>,
) -> ExportDocument {
    let components = grouping
        .components
        .iter()
        .map(|group| ComponentExport {
            component: ComponentMeta {
                identifier: group.root.identifier.clone(),
                title: group.root.title.clone(),
                state: group.root.state.as_ref().map(|s| s.name.clone()),
                priority: group.root.priority,
                task_count: group.tasks.len(),
            },
            tasks: group.tasks.iter().map(|issue| task_export(issue)).collect(),
        })
        .collect();

    let other_tasks = grouping
        .other
        .iter()
        .map(|issue| task_summary(issue))
        .collect();

    ExportDocument {
        project: ProjectMeta {
            name: project.name.clone(),
            id: project.id.clone(),
            description: project.description.clone(),
            state: project.state.clone(),
            progress: project.progress,
            total_issues: project.issues.nodes.len(),
            fetched_at,
        },
        components,
        other_tasks,
    }
}

fn state_summary(issue: &Issue) -> StateSummary {
    StateSummary {
        name: issue.state.as_ref().map(|s| s.name.clone()),
        state_type: issue.state.as_ref().and_then(|s| s.state_type.clone()),
    }
}

fn person_summary(person: &Person) -> PersonSummary {
    PersonSummary {
        name: person.name.clone(),
        email: person.email.clone(),
    }
}

fn task_export(issue: &Issue) -> TaskExport {
    TaskExport {
        identifier: issue.identifier.clone(),
        title: issue.title.clone(),
        description: issue.description.clone(),
        state: state_summary(issue),
        priority: issue.priority,
        assignee: issue.assignee.as_ref().map(person_summary),
        creator: issue.creator.as_ref().map(person_summary),
        parent: issue.parent.as_ref().map(|p| ParentSummary {
            identifier: p.identifier.clone(),
            title: p.title.clone(),
        }),
        children_count: issue.children.nodes.len(),
        created_at: issue.created_at,
        updated_at: issue.updated_at,
    }
}

fn task_summary(issue: &Issue) -> TaskSummary {
    TaskSummary {
        identifier: issue.identifier.clone(),
        title: issue.title.clone(),
        description: issue.description.clone(),
        state: state_summary(issue),
        priority: issue.priority,
        assignee: issue.assignee.as_ref().map(person_summary),
        created_at: issue.created_at,
        updated_at: issue.updated_at,
    }
}
