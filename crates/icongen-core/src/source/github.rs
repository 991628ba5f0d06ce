//! GitHub-backed icon source.
//!
//! Uses the curl crate (libcurl) for both the contents-API listing and the
//! raw per-file fetch. Blocking; the pipeline is strictly sequential.

use std::time::Duration;
use thiserror::Error;

use super::{parse, IconEntry, IconSource};
use crate::config::IcongenConfig;
use crate::target::RepoId;

/// Production API base. Integration tests override this to point at a local
/// server.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Error from fetching one URL (transport, HTTP status, or body decoding).
/// Typed so the pipeline can record per-item failures without string
/// matching.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("transfer: {0}")]
    Transfer(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// Response body was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Body(#[from] std::string::FromUtf8Error),
}

/// Lists one repository directory via the contents API and fetches raw files
/// from their direct-download URLs.
pub struct GitHubSource {
    repo: RepoId,
    dir: String,
    api_base: String,
    user_agent: String,
    token: Option<String>,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl GitHubSource {
    pub fn new(repo: RepoId, dir: &str, cfg: &IcongenConfig) -> Self {
        Self {
            repo,
            dir: dir.trim_matches('/').to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: cfg.user_agent.clone(),
            token: cfg.github_token.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }

    /// Replace the API base (e.g. with a local test server).
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.repo.owner, self.repo.name, self.dir
        )
    }

    /// One GET, body collected into a string. Exactly one outbound request;
    /// no retry.
    fn get(&self, url: &str, api_request: bool) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        let mut list = curl::easy::List::new();
        if api_request {
            list.append("Accept: application/vnd.github.v3+json")?;
        }
        if let Some(token) = &self.token {
            list.append(&format!("Authorization: Bearer {}", token.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status {
                url: url.to_string(),
                code,
            });
        }

        Ok(String::from_utf8(body)?)
    }
}

impl IconSource for GitHubSource {
    fn list(&self) -> Vec<IconEntry> {
        let url = self.listing_url();
        let body = match self.get(&url, true) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("listing {} failed: {}", url, e);
                return Vec::new();
            }
        };
        match parse::parse_listing(&body) {
            Ok(entries) => {
                tracing::debug!("{}: {} vector entries", url, entries.len());
                entries
            }
            Err(e) => {
                tracing::warn!("listing {} returned unparseable JSON: {}", url, e);
                Vec::new()
            }
        }
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.get(url, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(api_base: &str) -> GitHubSource {
        let repo = RepoId {
            owner: "acme".to_string(),
            name: "icons".to_string(),
        };
        GitHubSource::new(repo, "assets/svg", &IcongenConfig::default()).with_api_base(api_base)
    }

    #[test]
    fn listing_url_shape() {
        let s = source("https://api.github.com");
        assert_eq!(
            s.listing_url(),
            "https://api.github.com/repos/acme/icons/contents/assets/svg"
        );
    }

    #[test]
    fn listing_url_trims_slashes() {
        let repo = RepoId {
            owner: "acme".to_string(),
            name: "icons".to_string(),
        };
        let s = GitHubSource::new(repo, "/assets/svg/", &IcongenConfig::default())
            .with_api_base("http://127.0.0.1:9/");
        assert_eq!(
            s.listing_url(),
            "http://127.0.0.1:9/repos/acme/icons/contents/assets/svg"
        );
    }
}
