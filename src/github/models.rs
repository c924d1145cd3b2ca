use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OrgInfo {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoInfo {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestInfo {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub user: Option<UserInfo>,
}

impl PullRequestInfo {
    /// Login of the submitter; deleted accounts show up as `ghost` like on github.com.
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.login.as_str())
            .unwrap_or("ghost")
    }
}

/// One page of a listing plus whether GitHub advertised a following page.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub has_next: bool,
}
