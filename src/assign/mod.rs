//! Best-effort assignment workflow for the planned component work.
//!
//! Resolves a fixed set of issue identifiers, assigns each to the invoking
//! API user, and moves Backlog issues to an "in progress"-like state when the
//! team has one. Every mutation is independent: a failure is logged as a
//! warning and the loop continues. There is no transactional grouping and no
//! rollback.

use anyhow::Result;

use crate::export::PROJECT_NAME;
use crate::linear::LinearClient;
use crate::models::{Issue, Viewer, WorkflowState};

/// Team whose workflow states are consulted.
pub const TEAM_KEY: &str = "DRF";

/// The component issue the plan hangs off.
pub const COMPONENT_IDENTIFIER: &str = "DRF-225";

/// Planned work, in execution-priority order. The component itself comes
/// first so it is picked up alongside its tasks.
pub const PLAN_IDENTIFIERS: [&str; 5] = ["DRF-225", "DRF-228", "DRF-227", "DRF-229", "DRF-226"];

/// Candidate state names tried in order when looking for "in progress".
const IN_PROGRESS_CANDIDATES: [&str; 4] = ["In Progress", "Started", "Doing", "Active"];

/// Issues are only advanced out of this state.
const BACKLOG_STATE: &str = "Backlog";

/// Pick the first configured state matching the in-progress candidates.
pub fn find_in_progress_state(states: &[WorkflowState]) -> Option<&WorkflowState> {
    IN_PROGRESS_CANDIDATES
        .iter()
        .find_map(|candidate| states.iter().find(|s| s.name == *candidate))
}

/// Resolve one planned identifier against the fetched issues.
///
/// The component identifier resolves to the component issue itself; every
/// other identifier only counts when its parent is the component.
pub fn resolve_planned<'a>(issues: &'a [Issue], identifier: &str) -> Option<&'a Issue> {
    if identifier == COMPONENT_IDENTIFIER {
        return issues.iter().find(|i| i.identifier == identifier);
    }
    issues.iter().find(|i| {
        i.identifier == identifier
            && i.parent
                .as_ref()
                .is_some_and(|p| p.identifier == COMPONENT_IDENTIFIER)
    })
}

/// Run the workflow: resolve the plan, then assign and advance each issue.
pub async fn run(client: &LinearClient) -> Result<()> {
    let viewer = match client.viewer().await {
        Ok(viewer) => viewer,
        Err(e) => {
            tracing::error!(error = %e, "could not resolve the current user, aborting");
            return Ok(());
        }
    };
    tracing::info!(user = %viewer.name, email = %viewer.email, "authenticated");

    let states = match client.team_states(TEAM_KEY).await {
        Ok(states) => states,
        Err(e) => {
            tracing::warn!(team = TEAM_KEY, error = %e, "could not fetch workflow states");
            Vec::new()
        }
    };
    let in_progress = find_in_progress_state(&states);
    match in_progress {
        Some(state) => tracing::info!(state = %state.name, "found in-progress state"),
        None => {
            tracing::warn!("no in-progress state configured, issues will keep their state")
        }
    }

    let project = match client.project_with_issues(PROJECT_NAME).await {
        Ok(Some(project)) => project,
        Ok(None) => {
            tracing::error!(project = PROJECT_NAME, "project not found, aborting");
            return Ok(());
        }
        Err(e) => {
            tracing::error!(error = %e, "could not fetch project, aborting");
            return Ok(());
        }
    };
    let issues = &project.issues.nodes;

    for identifier in PLAN_IDENTIFIERS {
        let Some(issue) = resolve_planned(issues, identifier) else {
            tracing::warn!(identifier, "planned issue not found, skipping");
            continue;
        };
        assign_and_advance(client, &viewer, issue, in_progress).await;
    }

    Ok(())
}

/// Assign one issue to the viewer and advance it out of Backlog. Both
/// mutations are best-effort.
async fn assign_and_advance(
    client: &LinearClient,
    viewer: &Viewer,
    issue: &Issue,
    in_progress: Option<&WorkflowState>,
) {
    let identifier = issue.identifier.as_str();

    let already_ours = issue
        .assignee
        .as_ref()
        .is_some_and(|a| a.id.as_deref() == Some(viewer.id.as_str()));
    if already_ours {
        tracing::info!(identifier, assignee = %viewer.name, "already assigned");
    } else {
        match client.update_assignee(&issue.id, &viewer.id).await {
            Ok(update) if update.success => {
                tracing::info!(identifier, assignee = %viewer.name, "assigned")
            }
            Ok(_) => tracing::warn!(identifier, "assignment not accepted"),
            Err(e) => tracing::warn!(identifier, error = %e, "failed to assign"),
        }
    }

    let Some(target) = in_progress else {
        return;
    };
    let in_backlog = issue
        .state
        .as_ref()
        .is_some_and(|s| s.name == BACKLOG_STATE);
    if in_backlog {
        match client.update_state(&issue.id, &target.id).await {
            Ok(update) if update.success => {
                tracing::info!(identifier, state = %target.name, "moved to in-progress")
            }
            Ok(_) => tracing::warn!(identifier, "state change not accepted"),
            Err(e) => tracing::warn!(identifier, error = %e, "failed to change state"),
        }
    }
}
