use crate::error::Result;
use crate::github::GithubApi;
use crate::selector::Selector;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub org: String,
    pub name: String,
}

/// Walks every page of `org`'s repositories, keeping those `projects` accepts.
///
/// Any failing page aborts the whole listing.
pub async fn fetch_all_repositories<A: GithubApi + ?Sized>(
    client: &A,
    org: &str,
    projects: &Selector,
) -> Result<Vec<Repository>> {
    let mut retained = Vec::new();
    let mut page = 1u32;
    loop {
        let page_result = client.list_org_repos(org, page).await?;
        debug!(
            org,
            page,
            count = page_result.items.len(),
            "fetched repositories"
        );

        let items = page_result.items;
        if items.is_empty() {
            break;
        }
        retained.extend(
            items
                .into_iter()
                .filter(|repo| projects.accepts(&repo.name))
                .map(|repo| Repository {
                    org: org.to_string(),
                    name: repo.name,
                }),
        );
        if !page_result.has_next {
            break;
        }
        page += 1;
    }
    Ok(retained)
}
