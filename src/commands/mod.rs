pub mod pulls;
pub mod repos;

use crate::github::GithubApi;
use crate::selector::Selector;
use tracing::debug;

/// Organizations to search: the explicit selector in parse order, or every
/// organization the token can see in API order.
pub async fn resolve_orgs<A: GithubApi + ?Sized>(
    client: &A,
    explicit: &Selector,
) -> crate::error::Result<Vec<String>> {
    if !explicit.is_empty() {
        return Ok(explicit.iter().map(str::to_string).collect());
    }

    let mut orgs = Vec::new();
    let mut page = 1u32;
    loop {
        let page_result = client.list_user_orgs(page).await?;
        debug!(page, count = page_result.items.len(), "fetched organizations");
        if page_result.items.is_empty() {
            break;
        }
        orgs.extend(page_result.items.into_iter().map(|o| o.login));
        if !page_result.has_next {
            break;
        }
        page += 1;
    }
    Ok(orgs)
}
