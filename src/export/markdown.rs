//! Markdown summary rendering for the export document.

use super::document::{ExportDocument, TaskExport, TaskSummary};

/// Cap for the "Other Tasks" section.
const OTHER_TASKS_LIMIT: usize = 50;
/// Description preview length, in characters.
const DESCRIPTION_PREVIEW: usize = 200;

/// Render the human-readable companion to the JSON export.
pub fn render(doc: &ExportDocument) -> String {
    let mut out = String::new();

    out.push_str("# Driftwell Issue Export\n\n");
    out.push_str(&format!("**Project:** {}\n", doc.project.name));
    out.push_str(&format!(
        "**Fetched:** {}\n",
        doc.project.fetched_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!("**Total Issues:** {}\n", doc.project.total_issues));
    out.push_str(&format!("**Main Components:** {}\n\n", doc.components.len()));

    out.push_str("---\n\n");
    out.push_str("## Main Components\n\n");

    for entry in &doc.components {
        let comp = &entry.component;
        out.push_str(&format!("### {}: {}\n\n", comp.identifier, comp.title));
        out.push_str(&format!(
            "- **State:** {}\n",
            comp.state.as_deref().unwrap_or("N/A")
        ));
        out.push_str(&format!("- **Priority:** {}\n", priority_label(comp.priority)));
        out.push_str(&format!("- **Tasks:** {}\n\n", entry.tasks.len()));

        if !entry.tasks.is_empty() {
            out.push_str("#### Tasks\n\n");
            for task in &entry.tasks {
                render_task(&mut out, task);
            }
        }

        out.push_str("\n---\n\n");
    }

    if !doc.other_tasks.is_empty() {
        out.push_str("## Other Tasks (Not in Components)\n\n");
        for task in doc.other_tasks.iter().take(OTHER_TASKS_LIMIT) {
            render_other_task(&mut out, task);
        }
        if doc.other_tasks.len() > OTHER_TASKS_LIMIT {
            out.push_str(&format!(
                "\n*... and {} more tasks*\n",
                doc.other_tasks.len() - OTHER_TASKS_LIMIT
            ));
        }
    }

    out
}

fn render_task(out: &mut String, task: &TaskExport) {
    out.push_str(&format!("- **{}** - {}\n", task.identifier, task.title));
    out.push_str(&format!(
        "  - State: {} ({})\n",
        task.state.name.as_deref().unwrap_or("N/A"),
        task.state.state_type.as_deref().unwrap_or("N/A")
    ));
    if let Some(priority) = task.priority.filter(|p| *p > 0.0) {
        out.push_str(&format!("  - Priority: {}\n", priority));
    }
    if let Some(assignee) = &task.assignee {
        out.push_str(&format!("  - Assignee: {}\n", assignee.name));
    }
    if let Some(parent) = &task.parent {
        out.push_str(&format!("  - Parent: {}\n", parent.identifier));
    }
    if let Some(description) = &task.description {
        out.push_str(&format!(
            "  - Description: {}...\n",
            description_preview(description)
        ));
    }
    out.push('\n');
}

fn render_other_task(out: &mut String, task: &TaskSummary) {
    out.push_str(&format!("- **{}** - {}\n", task.identifier, task.title));
    out.push_str(&format!(
        "  - State: {}\n",
        task.state.name.as_deref().unwrap_or("N/A")
    ));
}

/// First 200 characters of a description, newlines flattened to spaces.
fn description_preview(description: &str) -> String {
    description
        .chars()
        .take(DESCRIPTION_PREVIEW)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

fn priority_label(priority: Option<f64>) -> String {
    match priority {
        Some(p) => p.to_string(),
        None => "N/A".to_string(),
    }
}
