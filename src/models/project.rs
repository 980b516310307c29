use serde::{Deserialize, Serialize};

use super::{Connection, Issue};

/// A Linear project with its full issue list.
///
/// `progress` is Linear's completion fraction in `0.0..=1.0`. The issue
/// connection is fetched in one page; this tooling does not paginate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub state: Option<String>,
    pub progress: Option<f64>,
    #[serde(default)]
    pub issues: Connection<Issue>,
}
