//! GitHub REST tag listing.

use action_docs_core::traits::TagSource;
use action_docs_core::{Error, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Public GitHub API base.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Tags requested per call; only the first page is read.
pub const TAGS_PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("action-docs/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// [`TagSource`] backed by `GET /repos/{owner}/{repo}/tags`.
pub struct GitHubTagSource {
    client: reqwest::Client,
    api_base: Url,
    token: SecretString,
}

impl std::fmt::Debug for GitHubTagSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubTagSource")
            .field("api_base", &self.api_base.as_str())
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GitHubTagSource {
    /// Creates a tag source for the API at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `api_base` is not an http(s) URL, and
    /// [`Error::RemoteRequestFailed`] if the HTTP client cannot be built.
    pub fn new(api_base: &str, token: SecretString) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .ok_or_else(|| Error::ConfigError {
                message: format!("Invalid GitHub API URL: {api_base}"),
            })?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::RemoteRequestFailed {
                endpoint: api_base.to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            client,
            api_base,
            token,
        })
    }

    /// Returns the tag listing URL for `owner/repo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_cli::github::GitHubTagSource;
    ///
    /// let source = GitHubTagSource::new("https://ghe.example.com/api/v3", "t".into()).unwrap();
    /// assert_eq!(
    ///     source.tags_url("octo", "greeter").as_str(),
    ///     "https://ghe.example.com/api/v3/repos/octo/greeter/tags?per_page=100"
    /// );
    /// ```
    #[must_use]
    pub fn tags_url(&self, owner: &str, repo: &str) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["repos", owner, repo, "tags"]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("per_page", &TAGS_PER_PAGE.to_string());
        url
    }
}

#[async_trait]
impl TagSource for GitHubTagSource {
    async fn list_tags(&self, owner: &str, repo: &str) -> Result<Vec<String>> {
        let url = self.tags_url(owner, repo);
        let endpoint = url.to_string();
        debug!(%endpoint, "listing tags");

        let response = self
            .client
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| Error::RemoteRequestFailed {
                endpoint: endpoint.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteRequestFailed {
                endpoint,
                source: format!("unexpected status {status}").into(),
            });
        }

        let entries: Vec<TagEntry> =
            response.json().await.map_err(|e| Error::RemoteRequestFailed {
                endpoint: endpoint.clone(),
                source: Box::new(e),
            })?;
        debug!(%endpoint, count = entries.len(), "tags listed");
        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> GitHubTagSource {
        GitHubTagSource::new(base, SecretString::from("token")).unwrap()
    }

    #[test]
    fn test_tags_url_public_api() {
        assert_eq!(
            source(DEFAULT_API_URL).tags_url("octo", "greeter").as_str(),
            "https://api.github.com/repos/octo/greeter/tags?per_page=100"
        );
    }

    #[test]
    fn test_tags_url_trailing_slash_and_encoding() {
        assert_eq!(
            source("https://ghe.example.com/api/v3/")
                .tags_url("octo", "my repo")
                .as_str(),
            "https://ghe.example.com/api/v3/repos/octo/my%20repo/tags?per_page=100"
        );
    }

    #[test]
    fn test_invalid_api_base_rejected() {
        for base in ["not a url", "ftp://example.com", "mailto:a@b.c"] {
            let err = GitHubTagSource::new(base, SecretString::from("t")).unwrap_err();
            assert!(err.is_config_error(), "{base}");
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let source = GitHubTagSource::new(DEFAULT_API_URL, SecretString::from("s3cr3t")).unwrap();
        let rendered = format!("{source:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("s3cr3t"));
    }

    #[test]
    fn test_tag_entries_decode() {
        let body = r#"[
            {"name": "v1.2.0", "commit": {"sha": "abc"}, "zipball_url": "x"},
            {"name": "v1.1.0", "commit": {"sha": "def"}}
        ]"#;
        let entries: Vec<TagEntry> = serde_json::from_str(body).unwrap();
        let names: Vec<_> = entries.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["v1.2.0", "v1.1.0"]);
    }
}
