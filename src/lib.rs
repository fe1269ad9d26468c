//! MCP server that summarizes GitHub repositories and users.
//!
//! Each tool issues one query against the GitHub GraphQL API and renders
//! the result as plain text.

pub mod config;
pub mod error;
pub mod graphql;
pub mod queries;
pub mod server;
