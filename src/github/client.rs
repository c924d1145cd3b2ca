use crate::display;
use crate::error::{GitfullstoryError, Result};
use crate::github::models::{OrgInfo, PageResult, PullRequestInfo, RepoInfo};
use crate::github::GithubApi;
use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

/// Largest page size the GitHub API honors. Every listing asks for it explicitly.
pub const PER_PAGE: u8 = 100;

pub struct GithubClient {
    octocrab: Octocrab,
    verbose: bool,
}

#[derive(Debug, Default, Clone)]
pub struct ClientOptions {
    pub api_url: Option<String>,
    pub timeout: Option<Duration>,
    pub verbose: bool,
}

impl GithubClient {
    pub fn new(token: &str, options: &ClientOptions) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(url) = &options.api_url {
            builder = builder
                .base_uri(url.as_str())
                .map_err(|e| GitfullstoryError::Config(format!("Invalid API URL {url}: {e}")))?;
        }
        if let Some(timeout) = options.timeout {
            builder = builder
                .set_connect_timeout(Some(timeout))
                .set_read_timeout(Some(timeout));
        }
        let octocrab = builder
            .build()
            .map_err(|e| GitfullstoryError::GitHub(e.to_string()))?;
        Ok(Self {
            octocrab,
            verbose: options.verbose,
        })
    }

    /// Reports the remaining core API budget when running verbose.
    pub async fn log_rate_limit_if_verbose(&self) {
        if !self.verbose {
            return;
        }
        match self.octocrab.ratelimit().get().await {
            Ok(limits) => {
                let rate = limits.rate;
                let reset_at = i64::try_from(rate.reset)
                    .ok()
                    .and_then(|reset| chrono::DateTime::from_timestamp(reset, 0))
                    .map(|dt| dt.format("%H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| rate.reset.to_string());
                info!(
                    "Rate limit: {}/{} remaining (resets at {reset_at})",
                    rate.remaining, rate.limit
                );
            }
            Err(e) => display::warn(&format!("Could not check rate limit: {e}")),
        }
    }

    async fn get_page<T>(&self, route: &str, params: &[(&str, &str)]) -> Result<PageResult<T>>
    where
        T: DeserializeOwned + Send,
    {
        let page: Page<T> = self.octocrab.get(route, Some(&params)).await?;
        Ok(PageResult {
            has_next: page.next.is_some(),
            items: page.items,
        })
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn list_user_orgs(&self, page: u32) -> Result<PageResult<OrgInfo>> {
        let page = page.to_string();
        let per_page = PER_PAGE.to_string();
        self.get_page(
            "/user/orgs",
            &[("per_page", per_page.as_str()), ("page", page.as_str())],
        )
        .await
        .map_err(|e| {
            GitfullstoryError::GitHub(format!("Error retrieving organizations from GitHub: {e}"))
        })
    }

    async fn list_org_repos(&self, org: &str, page: u32) -> Result<PageResult<RepoInfo>> {
        let route = format!("/orgs/{org}/repos");
        let page_param = page.to_string();
        let per_page = PER_PAGE.to_string();
        self.get_page(
            &route,
            &[
                ("type", "all"),
                ("per_page", per_page.as_str()),
                ("page", page_param.as_str()),
            ],
        )
        .await
        .map_err(|e| {
            GitfullstoryError::GitHub(format!(
                "Error fetching repos for organization {org} (page {page}): {e}"
            ))
        })
    }

    async fn list_open_pulls(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<PageResult<PullRequestInfo>> {
        let route = format!("/repos/{owner}/{repo}/pulls");
        let page_param = page.to_string();
        let per_page = PER_PAGE.to_string();
        self.get_page(
            &route,
            &[
                ("state", "open"),
                ("per_page", per_page.as_str()),
                ("page", page_param.as_str()),
            ],
        )
        .await
        .map_err(|e| {
            GitfullstoryError::GitHub(format!(
                "Error fetching pull requests for {owner}/{repo}: {e}"
            ))
        })
    }
}
