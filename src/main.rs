use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use github_stats_mcp::config::{Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use github_stats_mcp::graphql::GraphqlClient;
use github_stats_mcp::server;
use rmcp::{transport::stdio, ServiceExt};
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// MCP server for GitHub stats: repository and user summaries over GraphQL
#[derive(Parser)]
#[command(name = "github-stats-mcp", version, about)]
struct Cli {
    /// GitHub personal access token.
    /// Can also be set via GITHUB_TOKEN environment variable.
    #[arg(long)]
    token: Option<String>,

    /// Read GitHub token from an environment variable.
    /// Default: GITHUB_TOKEN
    #[arg(long = "token-env")]
    token_env: Option<String>,

    /// GitHub API base URL; queries go to <api-url>/graphql
    #[arg(long = "api-url", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("Error running GitHub Stats MCP server: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    // Resolve token: --token > --token-env > GITHUB_TOKEN
    let token = if let Some(t) = cli.token {
        Some(t)
    } else {
        let env_name = cli.token_env.as_deref().unwrap_or("GITHUB_TOKEN");
        match std::env::var(env_name) {
            Ok(t) if !t.is_empty() => {
                tracing::info!(env = env_name, "Read GitHub token from environment variable");
                Some(t)
            }
            _ => None,
        }
    };

    let config = Config::default()
        .with_token(token)
        .with_api_url(cli.api_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));

    if !config.is_authenticated() {
        tracing::warn!("No GitHub token provided, GraphQL requests will be rejected with 401");
    }

    tracing::info!(
        authenticated = config.is_authenticated(),
        api_url = %config.api_url,
        timeout_secs = cli.timeout_secs,
        "GitHub Stats MCP server starting"
    );

    let client = GraphqlClient::new(&config)?;
    let service = server::GithubStatsServer::new(client);
    let running = service.serve(stdio()).await?;

    tokio::select! {
        quit = running.waiting() => {
            quit?;
            tracing::info!("Client disconnected, stopping");
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutting down GitHub Stats MCP server...");
        }
    }

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
