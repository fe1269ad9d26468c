use serde::{Deserialize, Serialize};

use super::{or_placeholder, Nodes, TotalCount};
use crate::graphql::GraphqlClient;

pub const QUERY: &str = include_str!("repository.graphql");

pub const UNABLE_TO_FETCH: &str = "Unable to fetch repository information.";

#[derive(Debug, Serialize)]
pub struct RepositoryVariables<'a> {
    pub owner: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryData {
    pub repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub issues: TotalCount,
    pub pull_requests: TotalCount,
    pub primary_language: Option<Language>,
    pub languages: Option<Nodes<Language>>,
    pub releases: Nodes<Release>,
}

#[derive(Debug, Deserialize)]
pub struct Language {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub tag_name: String,
    /// Null for draft releases.
    pub published_at: Option<String>,
}

/// Fetch a repository and render it as text. Never fails: transport
/// problems collapse to [`UNABLE_TO_FETCH`].
pub async fn repository_info(client: &GraphqlClient, owner: &str, name: &str) -> String {
    let variables = RepositoryVariables { owner, name };

    let data = match client
        .query_data::<_, RepositoryData>(QUERY, &variables)
        .await
    {
        Ok(Some(data)) => data,
        Ok(None) | Err(_) => return UNABLE_TO_FETCH.to_string(),
    };

    match data.repository {
        Some(repo) => render(&repo),
        None => format!("Repository {}/{} not found.", owner, name),
    }
}

pub fn render(repo: &Repository) -> String {
    let primary_language = or_placeholder(
        repo.primary_language.as_ref().map(|l| l.name.as_str()),
        "None",
    );

    let languages: Vec<&str> = repo
        .languages
        .iter()
        .flat_map(|l| l.iter())
        .map(|l| l.name.as_str())
        .collect();
    let languages = if languages.is_empty() {
        "None".to_string()
    } else {
        languages.join(", ")
    };

    let latest_release = match repo.releases.iter().next() {
        Some(Release {
            tag_name,
            published_at: Some(published_at),
        }) => format!("{} ({})", tag_name, published_at),
        Some(Release { tag_name, .. }) => tag_name.clone(),
        None => "None".to_string(),
    };

    [
        format!("Repository: {}", repo.name),
        format!(
            "Description: {}",
            or_placeholder(repo.description.as_deref(), "No description")
        ),
        format!("URL: {}", repo.url),
        format!("Stars: {}", repo.stargazer_count),
        format!("Forks: {}", repo.fork_count),
        format!("Open Issues: {}", repo.issues.total_count),
        format!("Open Pull Requests: {}", repo.pull_requests.total_count),
        format!("Primary Language: {}", primary_language),
        format!("Languages: {}", languages),
        format!("Latest Release: {}", latest_release),
    ]
    .join("\n")
}
