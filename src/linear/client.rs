//! HTTP transport for the Linear GraphQL API.
//!
//! One POST per query or mutation, authenticated with the raw API key in the
//! `Authorization` header. Configuration is via the `LINEAR_API_KEY`
//! environment variable. There is no retry, pagination, rate-limit handling,
//! or caching.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::queries;
use crate::models::{Connection, IssueUpdate, Project, Team, Viewer, WorkflowState};

/// Linear's GraphQL endpoint.
const API_URL: &str = "https://api.linear.app/graphql";

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LINEAR_API_KEY is not set")]
    MissingApiKey,

    #[error("Linear API error: {0}")]
    Api(String),

    #[error("response contained no data")]
    MissingData,
}

/// Top-level GraphQL response envelope.
///
/// Linear returns `errors` alongside a possibly-null `data` field; a
/// response with neither is treated as [`ClientError::MissingData`].
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// Thin client over [`reqwest::Client`] for Linear's GraphQL API.
#[derive(Debug, Clone)]
pub struct LinearClient {
    api_key: String,
    client: Client,
}

impl LinearClient {
    /// Create a client from the `LINEAR_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var("LINEAR_API_KEY").map_err(|_| ClientError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Create with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Execute one GraphQL request and decode the `data` payload.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .post(API_URL)
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?;

        let envelope: GraphQLResponse<T> = response.json().await?;
        Self::unwrap_envelope(envelope)
    }

    /// Surface GraphQL-level errors and the missing-data case.
    fn unwrap_envelope<T>(envelope: GraphQLResponse<T>) -> Result<T, ClientError> {
        if let Some(errors) = envelope.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(ClientError::Api(messages.join("; ")));
        }
        envelope.data.ok_or(ClientError::MissingData)
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Fetch a project by name with its full issue list.
    ///
    /// Returns `None` when no project matches; the caller decides whether
    /// that is fatal.
    pub async fn project_with_issues(&self, name: &str) -> Result<Option<Project>, ClientError> {
        #[derive(Deserialize)]
        struct Data {
            projects: Connection<Project>,
        }

        let data: Data = self
            .execute(queries::PROJECT_WITH_ISSUES, json!({ "name": name }))
            .await?;
        Ok(data.projects.nodes.into_iter().next())
    }

    /// Fetch the authenticated user.
    pub async fn viewer(&self) -> Result<Viewer, ClientError> {
        #[derive(Deserialize)]
        struct Data {
            viewer: Viewer,
        }

        let data: Data = self.execute(queries::VIEWER, json!({})).await?;
        Ok(data.viewer)
    }

    /// Fetch the workflow states configured for a team. An unknown team key
    /// yields an empty list rather than an error.
    pub async fn team_states(&self, team_key: &str) -> Result<Vec<WorkflowState>, ClientError> {
        #[derive(Deserialize)]
        struct Data {
            team: Option<Team>,
        }

        let data: Data = self
            .execute(queries::TEAM_STATES, json!({ "teamKey": team_key }))
            .await?;
        Ok(data.team.map(|t| t.states.nodes).unwrap_or_default())
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Reassign an issue to a user.
    pub async fn update_assignee(
        &self,
        issue_id: &str,
        user_id: &str,
    ) -> Result<IssueUpdate, ClientError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "issueUpdate")]
            issue_update: IssueUpdate,
        }

        let data: Data = self
            .execute(
                queries::UPDATE_ASSIGNEE,
                json!({ "issueId": issue_id, "userId": user_id }),
            )
            .await?;
        Ok(data.issue_update)
    }

    /// Move an issue to a different workflow state.
    pub async fn update_state(
        &self,
        issue_id: &str,
        state_id: &str,
    ) -> Result<IssueUpdate, ClientError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "issueUpdate")]
            issue_update: IssueUpdate,
        }

        let data: Data = self
            .execute(
                queries::UPDATE_STATE,
                json!({ "issueId": issue_id, "stateId": state_id }),
            )
            .await?;
        Ok(data.issue_update)
    }
}
