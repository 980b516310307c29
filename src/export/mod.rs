//! Issue aggregation pipeline: fetch, classify, serialize.
//!
//! Output is a JSON document plus a Markdown summary under `data/`, both
//! unconditionally overwritten. A project that cannot be resolved aborts the
//! run after one diagnostic and writes nothing.

pub mod document;
pub mod grouping;
pub mod markdown;

use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use crate::linear::LinearClient;

/// The project this tooling operates on.
pub const PROJECT_NAME: &str = "Driftwell scope";

const OUTPUT_DIR: &str = "data";
const JSON_FILE: &str = "issues.json";
const MARKDOWN_FILE: &str = "issues.md";

/// Fetch the project, group its issues into components, and write the JSON
/// and Markdown exports.
pub async fn run(client: &LinearClient) -> Result<()> {
    tracing::info!(project = PROJECT_NAME, "fetching project and issues");
    let Some(project) = client.project_with_issues(PROJECT_NAME).await? else {
        tracing::error!(project = PROJECT_NAME, "project not found, nothing written");
        return Ok(());
    };

    let issues = &project.issues.nodes;
    tracing::info!(total = issues.len(), "fetched issues");

    let grouping = grouping::group(issues);
    tracing::info!(
        components = grouping.components.len(),
        other = grouping.other.len(),
        "classified issues"
    );

    let doc = document::build_document(&project, &grouping, Utc::now());

    let out_dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join(JSON_FILE);
    std::fs::write(&json_path, serde_json::to_string_pretty(&doc)?)?;
    tracing::info!(path = %json_path.display(), "wrote JSON export");

    let md_path = out_dir.join(MARKDOWN_FILE);
    std::fs::write(&md_path, markdown::render(&doc))?;
    tracing::info!(path = %md_path.display(), "wrote Markdown summary");

    Ok(())
}
