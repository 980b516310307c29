//! Domain models for the Linear workspace.
//!
//! Everything here mirrors the shape of Linear's GraphQL responses; none of
//! it is owned by this crate. The aggregator trusts the upstream data as-is
//! and enforces no invariants beyond deduplication by [`Issue::identifier`].

mod issue;
mod project;
mod user;

pub use issue::*;
pub use project::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// GraphQL connection wrapper. Linear nests every list under `nodes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

// Not derived: a derive would bound `T: Default`, which the node types
// don't need to satisfy for an empty connection.
impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}
