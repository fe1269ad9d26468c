//! Single-shot GraphQL-over-HTTP client for the GitHub API.
//!
//! Every call issues exactly one POST to `<api_url>/graphql`. Failures are
//! classified into [`GraphqlError`] and logged once; nothing is retried.

use std::time::Duration;

use octocrab::service::middleware::retry::RetryConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{GraphQLErrorEntry, GraphqlError};

const GRAPHQL_ROUTE: &str = "/graphql";

/// Request body: `{"query": ..., "variables": ...}`.
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: &'a V,
}

pub struct GraphqlClient {
    github: octocrab::Octocrab,
    timeout: Duration,
}

impl GraphqlClient {
    /// Build a client from resolved configuration. Requires a Tokio runtime.
    pub fn new(config: &Config) -> Result<Self, GraphqlError> {
        let mut builder = octocrab::OctocrabBuilder::new()
            .base_uri(config.api_url.as_str())
            .map_err(|e| GraphqlError::Client(e.to_string()))?
            .add_retry_config(RetryConfig::None);

        if let Some(ref token) = config.token {
            builder = builder.personal_token(token.clone());
        }

        let github = builder
            .build()
            .map_err(|e| GraphqlError::Client(e.to_string()))?;

        Ok(Self {
            github,
            timeout: config.timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one query and return the parsed response body.
    ///
    /// Precedence of failures: timeout, then non-2xx status, then a
    /// non-empty top-level `errors` array (partial `data` is dropped), then
    /// anything else that went wrong on the wire or while parsing.
    pub async fn execute<V: Serialize>(
        &self,
        query: &str,
        variables: &V,
    ) -> Result<Value, GraphqlError> {
        let request = GraphQLRequest { query, variables };

        let result = match tokio::time::timeout(self.timeout, self.send(&request)).await {
            Ok(result) => result,
            Err(_) => Err(GraphqlError::Timeout),
        };

        if let Err(ref e) = result {
            tracing::warn!(kind = e.kind(), "GitHub GraphQL request failed: {}", e);
        }
        result
    }

    /// Run one query and deserialize its `data` member.
    ///
    /// `Ok(None)` means the response carried no `data` at all.
    pub async fn query_data<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &str,
        variables: &V,
    ) -> Result<Option<T>, GraphqlError> {
        let mut payload = self.execute(query, variables).await?;

        let data = match payload.get_mut("data").map(Value::take) {
            None | Some(Value::Null) => return Ok(None),
            Some(data) => data,
        };

        serde_json::from_value(data).map(Some).map_err(|e| {
            let err = GraphqlError::Unexpected(format!("unexpected response shape: {}", e));
            tracing::warn!(kind = err.kind(), "{}", err);
            err
        })
    }

    async fn send<V: Serialize>(
        &self,
        request: &GraphQLRequest<'_, V>,
    ) -> Result<Value, GraphqlError> {
        let response = self
            .github
            ._post(GRAPHQL_ROUTE, Some(request))
            .await
            .map_err(|e| GraphqlError::Unexpected(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GraphqlError::HttpStatus(status.as_u16()));
        }

        let body = self
            .github
            .body_to_string(response)
            .await
            .map_err(|e| GraphqlError::Unexpected(e.to_string()))?;

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| GraphqlError::Unexpected(format!("invalid JSON body: {}", e)))?;

        if let Some(errors) = graphql_errors(&payload) {
            return Err(GraphqlError::GraphQl(errors));
        }

        Ok(payload)
    }
}

/// Extract a non-empty top-level `errors` array, if any.
fn graphql_errors(payload: &Value) -> Option<Vec<GraphQLErrorEntry>> {
    let raw = payload.get("errors")?;
    let entries = raw.as_array().filter(|a| !a.is_empty())?;

    let parsed = serde_json::from_value::<Vec<GraphQLErrorEntry>>(raw.clone())
        .unwrap_or_else(|_| {
            entries
                .iter()
                .map(|e| GraphQLErrorEntry {
                    message: e.to_string(),
                    kind: None,
                    path: Vec::new(),
                })
                .collect()
        });
    Some(parsed)
}
