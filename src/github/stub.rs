//! In-memory `GithubApi` for exercising the fetch and report loops without a network.

use crate::error::{GitfullstoryError, Result};
use crate::github::models::UserInfo;
use crate::github::{GithubApi, OrgInfo, PageResult, PullRequestInfo, RepoInfo};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct StubGithub {
    org_pages: Vec<Vec<OrgInfo>>,
    repo_pages: HashMap<String, Vec<Vec<RepoInfo>>>,
    pull_pages: HashMap<String, Vec<Vec<PullRequestInfo>>>,
    failures: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

pub fn repo(name: &str) -> RepoInfo {
    RepoInfo {
        name: name.to_string(),
    }
}

pub fn pull(number: u64, author: &str, title: &str) -> PullRequestInfo {
    PullRequestInfo {
        number,
        title: title.to_string(),
        user: Some(UserInfo {
            login: author.to_string(),
        }),
    }
}

impl StubGithub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_org_pages(mut self, pages: Vec<Vec<&str>>) -> Self {
        self.org_pages = pages
            .into_iter()
            .map(|page| {
                page.into_iter()
                    .map(|login| OrgInfo {
                        login: login.to_string(),
                    })
                    .collect()
            })
            .collect();
        self
    }

    pub fn with_repo_pages(mut self, org: &str, pages: Vec<Vec<RepoInfo>>) -> Self {
        self.repo_pages.insert(org.to_string(), pages);
        self
    }

    pub fn with_repos(self, org: &str, names: &[&str]) -> Self {
        self.with_repo_pages(org, vec![names.iter().map(|n| repo(n)).collect()])
    }

    pub fn with_pull_pages(
        mut self,
        org: &str,
        repo: &str,
        pages: Vec<Vec<PullRequestInfo>>,
    ) -> Self {
        self.pull_pages.insert(format!("{org}/{repo}"), pages);
        self
    }

    pub fn with_pulls(self, org: &str, repo: &str, pulls: Vec<PullRequestInfo>) -> Self {
        self.with_pull_pages(org, repo, vec![pulls])
    }

    pub fn fail_orgs(mut self) -> Self {
        self.failures.insert("orgs".to_string());
        self
    }

    pub fn fail_repo_page(mut self, org: &str, page: u32) -> Self {
        self.failures.insert(format!("repos:{org}:{page}"));
        self
    }

    pub fn fail_pulls(mut self, org: &str, repo: &str) -> Self {
        self.failures.insert(format!("pulls:{org}/{repo}"));
        self
    }

    /// Every page request issued so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, target: String, page: u32) -> Result<()> {
        let request = format!("{target}#{page}");
        self.requests.lock().unwrap().push(request.clone());
        if self.failures.contains(&target) || self.failures.contains(&format!("{target}:{page}")) {
            return Err(GitfullstoryError::GitHub(format!("stubbed failure for {request}")));
        }
        Ok(())
    }
}

fn page_of<T: Clone>(pages: Option<&Vec<Vec<T>>>, page: u32) -> PageResult<T> {
    let pages = pages.map(Vec::as_slice).unwrap_or(&[]);
    let index = page.saturating_sub(1) as usize;
    PageResult {
        items: pages.get(index).cloned().unwrap_or_default(),
        has_next: index + 1 < pages.len(),
    }
}

#[async_trait]
impl GithubApi for StubGithub {
    async fn list_user_orgs(&self, page: u32) -> Result<PageResult<OrgInfo>> {
        self.record("orgs".to_string(), page)?;
        Ok(page_of(Some(&self.org_pages), page))
    }

    async fn list_org_repos(&self, org: &str, page: u32) -> Result<PageResult<RepoInfo>> {
        self.record(format!("repos:{org}"), page)?;
        Ok(page_of(self.repo_pages.get(org), page))
    }

    async fn list_open_pulls(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<PageResult<PullRequestInfo>> {
        self.record(format!("pulls:{owner}/{repo}"), page)?;
        Ok(page_of(self.pull_pages.get(&format!("{owner}/{repo}")), page))
    }
}
