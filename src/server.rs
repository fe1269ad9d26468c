use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_handler, tool_router, ServerHandler};
use serde::Deserialize;

use crate::graphql::GraphqlClient;
use crate::queries::{repository, user};

#[derive(Clone)]
pub struct GithubStatsServer {
    client: Arc<GraphqlClient>,
    tool_router: ToolRouter<Self>,
}

// -- Tool parameter types --

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RepositoryParams {
    #[schemars(description = "Repository owner/organization")]
    pub owner: String,

    #[schemars(description = "Repository name")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UserParams {
    #[schemars(description = "GitHub username")]
    pub username: String,
}

impl GithubStatsServer {
    pub fn new(client: GraphqlClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    /// Text summary of `owner/name`, or a fixed message when it can't be fetched.
    pub async fn repository_info(&self, owner: &str, name: &str) -> String {
        tracing::debug!(owner, name, "get_repository_info");
        repository::repository_info(&self.client, owner, name).await
    }

    /// Text summary of `username`, or a fixed message when it can't be fetched.
    pub async fn user_info(&self, username: &str) -> String {
        tracing::debug!(username, "get_user_info");
        user::user_info(&self.client, username).await
    }
}

// -- MCP tool handlers --
//
// Fetch failures are reported in the text content, never as protocol errors.

#[tool_router]
impl GithubStatsServer {
    #[tool(
        name = "get_repository_info",
        description = "Get detailed information about a GitHub repository: description, stars, forks, open issues and pull requests, languages, and latest release"
    )]
    async fn get_repository_info(
        &self,
        Parameters(params): Parameters<RepositoryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self.repository_info(&params.owner, &params.name).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "get_user_info",
        description = "Get detailed information about a GitHub user: profile fields, repository and follower counts, and commit contributions"
    )]
    async fn get_user_info(
        &self,
        Parameters(params): Parameters<UserParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self.user_info(&params.username).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for GithubStatsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "github-stats-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "GitHub stats server. Use get_repository_info for a repository summary \
                 and get_user_info for a user profile summary."
                    .to_string(),
            ),
        }
    }
}
