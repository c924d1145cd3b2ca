mod client;
mod models;
#[cfg(test)]
pub mod stub;

pub use client::{ClientOptions, GithubClient};
pub use models::{OrgInfo, PageResult, PullRequestInfo, RepoInfo};

use crate::error::Result;
use async_trait::async_trait;

/// Paged read access to the GitHub API. Each call fetches exactly one page.
#[async_trait]
pub trait GithubApi: Send + Sync {
    async fn list_user_orgs(&self, page: u32) -> Result<PageResult<OrgInfo>>;

    async fn list_org_repos(&self, org: &str, page: u32) -> Result<PageResult<RepoInfo>>;

    async fn list_open_pulls(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<PageResult<PullRequestInfo>>;
}
