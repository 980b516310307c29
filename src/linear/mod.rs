//! Thin client for the Linear GraphQL API.

mod client;
mod queries;

pub use client::{ClientError, GraphQLError, GraphQLResponse, LinearClient};
