use serde::{Deserialize, Serialize};

use super::{or_placeholder, TotalCount};
use crate::graphql::GraphqlClient;

pub const QUERY: &str = include_str!("user.graphql");

pub const UNABLE_TO_FETCH: &str = "Unable to fetch user information.";

const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Serialize)]
pub struct UserVariables<'a> {
    pub username: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: Option<String>,
    pub login: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// GitHub returns an empty string when the address is private.
    pub email: Option<String>,
    pub website_url: Option<String>,
    pub repositories: TotalCount,
    pub followers: TotalCount,
    pub following: TotalCount,
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub total_commit_contributions: u64,
}

/// Fetch a user profile and render it as text. Never fails: transport
/// problems collapse to [`UNABLE_TO_FETCH`].
pub async fn user_info(client: &GraphqlClient, username: &str) -> String {
    let variables = UserVariables { username };

    let data = match client.query_data::<_, UserData>(QUERY, &variables).await {
        Ok(Some(data)) => data,
        Ok(None) | Err(_) => return UNABLE_TO_FETCH.to_string(),
    };

    match data.user {
        Some(user) => render(&user),
        None => format!("User {} not found.", username),
    }
}

pub fn render(user: &User) -> String {
    [
        format!("Name: {}", or_placeholder(user.name.as_deref(), NOT_PROVIDED)),
        format!("Username: {}", user.login),
        format!("Bio: {}", or_placeholder(user.bio.as_deref(), "No bio")),
        format!(
            "Company: {}",
            or_placeholder(user.company.as_deref(), NOT_PROVIDED)
        ),
        format!(
            "Location: {}",
            or_placeholder(user.location.as_deref(), NOT_PROVIDED)
        ),
        format!("Email: {}", or_placeholder(user.email.as_deref(), NOT_PROVIDED)),
        format!(
            "Website: {}",
            or_placeholder(user.website_url.as_deref(), NOT_PROVIDED)
        ),
        format!("Public Repositories: {}", user.repositories.total_count),
        format!("Followers: {}", user.followers.total_count),
        format!("Following: {}", user.following.total_count),
        format!(
            "Total Contributions: {}",
            user.contributions_collection.total_commit_contributions
        ),
    ]
    .join("\n")
}
