//! Component classification over a project's issues.
//!
//! A "component" is a grouping anchored on a root issue whose title follows
//! the `Component N: Title` convention. Membership is heuristic: substring
//! matching against issue titles (or their parent's title) plus the root's
//! explicit child links. Titles that happen to contain another component's
//! prefix will be claimed by whichever component is processed first; the
//! heuristic is brittle to title formatting drift and makes no guarantee of
//! a semantic partition.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Issue;

static COMPONENT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Component\s+\d+)").expect("valid regex"));

/// One component with its deduplicated, sorted member issues.
#[derive(Debug)]
pub struct ComponentGroup<'a> {
    pub root: &'a Issue,
    pub tasks: Vec<&'a Issue>,
}

/// The result of classifying a project's issues.
///
/// Every input issue lands in exactly one place: as a component root, in one
/// component's `tasks`, or in `other`.
#[derive(Debug)]
pub struct Grouping<'a> {
    pub components: Vec<ComponentGroup<'a>>,
    /// Issues matching no component, in input order.
    pub other: Vec<&'a Issue>,
}

/// Extract the component prefix from a title.
///
/// `"Component 1: Foo"` yields `"Component 1"` (text before the colon,
/// trimmed); `"Component 2 Bar"` yields `"Component 2"` via the leading
/// token; anything else yields `None`.
pub fn component_prefix(title: &str) -> Option<String> {
    if let Some((before, _)) = title.split_once(':') {
        let prefix = before.trim();
        if prefix.is_empty() {
            None
        } else {
            Some(prefix.to_string())
        }
    } else {
        COMPONENT_TOKEN
            .captures(title)
            .map(|caps| caps[1].to_string())
    }
}

/// True when the issue can anchor a component: it has no parent and its
/// title follows the canonical `Component N: Title` form.
///
/// The colon is required here. A bare `"Component 2 Bar"` title can still be
/// grouped as a member via the regex branch of [`component_prefix`], but it
/// does not anchor a component of its own.
pub fn is_component_root(issue: &Issue) -> bool {
    if issue.parent.is_some() {
        return false;
    }
    match issue.title.split_once(':') {
        Some((before, _)) => COMPONENT_TOKEN.is_match(before.trim()),
        None => false,
    }
}

/// Collect the issues belonging to `root`, deduplicated and sorted by
/// identifier. The root itself is never a member.
pub fn member_issues<'a>(issues: &'a [Issue], root: &Issue) -> Vec<&'a Issue> {
    let Some(prefix) = component_prefix(&root.title) else {
        return Vec::new();
    };

    let mut members: Vec<&Issue> = Vec::new();
    for issue in issues {
        if issue.identifier == root.identifier {
            continue;
        }
        let in_title = issue.title.contains(&prefix);
        let in_parent = issue
            .parent
            .as_ref()
            .is_some_and(|p| p.title.contains(&prefix));
        if in_title || in_parent {
            members.push(issue);
        }
    }

    // Explicit child links on the root count too, even when their titles
    // don't carry the prefix.
    for child in &root.children.nodes {
        if child.identifier == root.identifier {
            continue;
        }
        if let Some(issue) = issues.iter().find(|i| i.identifier == child.identifier) {
            members.push(issue);
        }
    }

    dedupe_sorted(members)
}

/// Deduplicate by identifier (first occurrence wins) and sort by identifier.
/// Idempotent: applying it to its own output is a no-op.
pub fn dedupe_sorted(issues: Vec<&Issue>) -> Vec<&Issue> {
    let mut seen = HashSet::new();
    let mut unique: Vec<&Issue> = issues
        .into_iter()
        .filter(|i| seen.insert(i.identifier.clone()))
        .collect();
    unique.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    unique
}

/// Classify `issues` into component groups and a residual list.
///
/// Components are processed in input order and claim their members as they
/// go, so an issue matched by two components is reported under the first.
pub fn group(issues: &[Issue]) -> Grouping<'_> {
    let roots: Vec<&Issue> = issues.iter().filter(|i| is_component_root(i)).collect();

    let mut claimed: HashSet<&str> = roots.iter().map(|r| r.identifier.as_str()).collect();
    let mut components = Vec::with_capacity(roots.len());
    for root in roots {
        let mut tasks = Vec::new();
        for issue in member_issues(issues, root) {
            if claimed.insert(issue.identifier.as_str()) {
                tasks.push(issue);
            }
        }
        components.push(ComponentGroup { root, tasks });
    }

    let other = issues
        .iter()
        .filter(|i| !claimed.contains(i.identifier.as_str()))
        .collect();

    Grouping { components, other }
}
