//! Fixed GraphQL query and mutation strings.
//!
//! All queries use variable substitution; no query text is built at runtime.

/// Fetch a project by name with its full issue connection, one page.
pub const PROJECT_WITH_ISSUES: &str = r#"
query($name: String!) {
    projects(filter: { name: { eq: $name } }) {
        nodes {
            id
            name
            description
            state
            progress
            issues(first: 250) {
                nodes {
                    id
                    identifier
                    title
                    description
                    priority
                    createdAt
                    updatedAt
                    state {
                        id
                        name
                        type
                    }
                    assignee {
                        id
                        name
                        email
                    }
                    creator {
                        id
                        name
                        email
                    }
                    parent {
                        id
                        identifier
                        title
                    }
                    children {
                        nodes {
                            id
                            identifier
                            title
                        }
                    }
                }
            }
        }
    }
}
"#;

/// Current authenticated user.
pub const VIEWER: &str = r#"
query {
    viewer {
        id
        name
        email
    }
}
"#;

/// Workflow states configured for a team.
pub const TEAM_STATES: &str = r#"
query($teamKey: String!) {
    team(key: $teamKey) {
        states {
            nodes {
                id
                name
                type
            }
        }
    }
}
"#;

/// Reassign an issue.
pub const UPDATE_ASSIGNEE: &str = r#"
mutation($issueId: String!, $userId: String!) {
    issueUpdate(id: $issueId, input: { assigneeId: $userId }) {
        success
    }
}
"#;

/// Move an issue to a different workflow state.
pub const UPDATE_STATE: &str = r#"
mutation($issueId: String!, $stateId: String!) {
    issueUpdate(id: $issueId, input: { stateId: $stateId }) {
        success
    }
}
"#;
