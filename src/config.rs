use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings the GraphQL client is built from. Resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token sent as `Authorization: Bearer <token>`.
    pub token: Option<String>,
    /// API root; the GraphQL endpoint is `<api_url>/graphql`.
    pub api_url: String,
    /// Wall-clock bound for one request, including reading the body.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
