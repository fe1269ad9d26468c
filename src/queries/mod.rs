//! Fixed GraphQL queries and their text renderings.

pub mod repository;
pub mod user;

use serde::Deserialize;

/// `{ totalCount }` as returned by every GitHub connection type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

/// `{ nodes [...] }` where both the list and its entries may be null.
#[derive(Debug, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Option<Vec<Option<T>>>,
}

impl<T> Nodes<T> {
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().flatten().flatten()
    }
}

/// Value of an optional text field, or `placeholder` when it is null or blank.
fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(placeholder)
}
