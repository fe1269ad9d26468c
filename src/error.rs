use std::fmt;

use serde::Deserialize;

/// One entry of a GraphQL response's top-level `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl fmt::Display for GraphQLErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{} ({})", self.message, kind),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GraphqlError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP error occurred: {0}")]
    HttpStatus(u16),

    #[error("GraphQL errors: {}", join_messages(.0))]
    GraphQl(Vec<GraphQLErrorEntry>),

    #[error("unexpected error: {0}")]
    Unexpected(String),

    #[error("failed to create GitHub client: {0}")]
    Client(String),
}

impl GraphqlError {
    /// Short label used as the `kind` field in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            GraphqlError::Timeout => "timeout",
            GraphqlError::HttpStatus(_) => "http-status",
            GraphqlError::GraphQl(_) => "graphql-errors",
            GraphqlError::Unexpected(_) => "unexpected",
            GraphqlError::Client(_) => "client",
        }
    }
}

fn join_messages(errors: &[GraphQLErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
