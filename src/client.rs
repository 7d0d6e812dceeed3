use anyhow::Context as _;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

use crate::models::{Repository, UserProfile};

/// Repositories requested per lookup; the card never shows more.
pub const REPO_PAGE_SIZE: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The profile endpoint answered with a non-success status.
    #[error("User not found")]
    NotFound,
    /// The repositories endpoint answered with a non-success status.
    #[error("Error fetching repos")]
    Repos,
    #[error("GET {url} failed")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed response from {url}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid url")]
    Url(#[from] url::ParseError),
}

#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: Url,
}

impl GitHubClient {
    pub fn new(api_base: Url, user_agent: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client, api_base })
    }

    /// Fetches a user by login. Any non-success status reads as "not found",
    /// matching what the card can usefully tell the user.
    pub async fn fetch_profile(&self, username: &str) -> Result<UserProfile, LookupError> {
        let url = self.api_base.join(&format!("users/{username}"))?;
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LookupError::Transport {
                url: url.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            tracing::debug!(%url, status = %resp.status(), "profile fetch failed");
            return Err(LookupError::NotFound);
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|source| LookupError::Transport {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| LookupError::Decode { url, source })
    }

    /// Fetches the 5 most recently updated repositories from the endpoint the
    /// profile response reported.
    pub async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>, LookupError> {
        let url = repos_page_url(repos_url)?;
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LookupError::Transport {
                url: url.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            tracing::debug!(%url, status = %resp.status(), "repository fetch failed");
            return Err(LookupError::Repos);
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|source| LookupError::Transport {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| LookupError::Decode { url, source })
    }
}

fn repos_page_url(repos_url: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(repos_url)?;
    url.query_pairs_mut()
        .append_pair("per_page", &REPO_PAGE_SIZE.to_string())
        .append_pair("sort", "updated");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repos_url_gets_fixed_page_query() {
        let url = repos_page_url("https://api.github.com/users/octocat/repos").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/repos?per_page=5&sort=updated"
        );
    }

    #[test]
    fn repos_url_must_be_absolute() {
        assert!(repos_page_url("/users/octocat/repos").is_err());
    }
}
