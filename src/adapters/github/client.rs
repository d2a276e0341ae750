//! GitHub REST adapter. Implements ProfilePort.

use crate::domain::{DomainError, Profile, Username};
use crate::ports::ProfilePort;
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

const USER_AGENT: &str = concat!("gh-portfolio/", env!("CARGO_PKG_VERSION"));

/// Fetches `GET {base_url}/users/{username}`.
///
/// No timeout and no retry: one request, two outcomes.
pub struct GithubProfileAdapter {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubProfileAdapter {
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.github.com"); trailing slash optional
    /// * `token` - Optional bearer token for higher rate limits
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn profile_url(&self, username: &Username) -> String {
        format!("{}/users/{}", self.base_url, username)
    }
}

#[async_trait::async_trait]
impl ProfilePort for GithubProfileAdapter {
    async fn fetch_profile(&self, username: &Username) -> Result<Profile, DomainError> {
        let url = self.profile_url(username);
        info!(username = %username, "fetching GitHub profile");

        let mut req = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .await
            .map_err(|e| DomainError::Profile(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(username = %username, status = status.as_u16(), "GitHub returned non-200");
            return Err(DomainError::ProfileStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Profile(format!("Failed to read response body: {}", e)))?;
        let profile = Profile::from_body(body)?;

        info!(
            username = %username,
            name = profile.display_name().unwrap_or("-"),
            body_len = profile.raw().len(),
            "GitHub profile fetched"
        );
        Ok(profile)
    }
}
