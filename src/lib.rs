//! Workspace automation for the Driftwell apps.
//!
//! Two independent pipelines share this crate:
//!
//! - The Linear pipeline ([`export`] and [`assign`]) talks to the Linear
//!   GraphQL API via [`linear::LinearClient`], classifies the "Driftwell
//!   scope" project's issues into components, and either serializes the
//!   result to disk or pushes assignment/state updates back.
//! - The icon pipeline ([`icons`]) deterministically renders the Driftwell
//!   app icon at every size the iOS and watchOS asset catalogs need.
//!
//! Neither pipeline reads the other's output.

pub mod assign;
pub mod export;
pub mod icons;
pub mod linear;
pub mod models;
