use crate::commands::repos::{fetch_all_repositories, Repository};
use crate::commands::resolve_orgs;
use crate::config::Settings;
use crate::display;
use crate::error::Result;
use crate::github::GithubApi;
use crate::selector::Selector;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestSummary {
    pub org: String,
    pub repo: String,
    pub number: u64,
    pub author: String,
    pub title: String,
}

/// Where matching pull requests end up: one line each as they arrive, or a
/// single JSON array once the run is over.
pub struct Report<W: Write> {
    out: W,
    json: bool,
    collected: Vec<PullRequestSummary>,
    count: usize,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            collected: Vec::new(),
            count: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn record(&mut self, pr: PullRequestSummary) -> Result<()> {
        self.count += 1;
        if self.json {
            self.collected.push(pr);
        } else {
            writeln!(self.out, "{}", display::pull_request_line(&pr))?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        if self.json {
            display::write_json(&mut self.out, &self.collected)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Every open pull request in `repo` whose author `users` accepts, across all pages.
pub async fn list_matching_pulls<A: GithubApi + ?Sized>(
    client: &A,
    repo: &Repository,
    users: &Selector,
) -> Result<Vec<PullRequestSummary>> {
    let mut matching = Vec::new();
    let mut page = 1u32;
    loop {
        let page_result = client.list_open_pulls(&repo.org, &repo.name, page).await?;
        debug!(
            org = %repo.org,
            repo = %repo.name,
            page,
            count = page_result.items.len(),
            "fetched open pull requests"
        );

        let items = page_result.items;
        if items.is_empty() {
            break;
        }
        matching.extend(
            items
                .iter()
                .filter(|pr| users.accepts(pr.author()))
                .map(|pr| PullRequestSummary {
                    org: repo.org.clone(),
                    repo: repo.name.clone(),
                    number: pr.number,
                    author: pr.author().to_string(),
                    title: pr.title.clone(),
                }),
        );
        if !page_result.has_next {
            break;
        }
        page += 1;
    }
    Ok(matching)
}

/// Reports the open pull requests of one repository.
///
/// A failed listing is only warned about; the only errors returned come from
/// writing the report.
pub async fn report_open_pull_requests<A, W>(
    client: &A,
    repo: &Repository,
    users: &Selector,
    report: &mut Report<W>,
) -> Result<()>
where
    A: GithubApi + ?Sized,
    W: Write,
{
    let pulls = match list_matching_pulls(client, repo, users).await {
        Ok(p) => p,
        Err(e) => {
            display::warn(&format!(
                "Failed to fetch pull requests for {}/{}: {e}",
                repo.org, repo.name
            ));
            return Ok(());
        }
    };

    for pr in pulls {
        report.record(pr)?;
    }
    Ok(())
}

pub async fn run<A, W>(
    client: &A,
    settings: &Settings,
    continue_on_error: bool,
    report: &mut Report<W>,
) -> Result<()>
where
    A: GithubApi + ?Sized,
    W: Write,
{
    let orgs = resolve_orgs(client, &settings.orgs).await?;

    info!(
        "Searching for open pull requests within github orgs: [{}]",
        orgs.join(", ")
    );
    if !settings.projects.is_empty() {
        info!("...for only projects: {}", settings.projects);
    }
    if !settings.users.is_empty() {
        info!("...by users: {}", settings.users);
    }

    for org_name in &orgs {
        let repos = match fetch_all_repositories(client, org_name, &settings.projects).await {
            Ok(r) => r,
            Err(e) if continue_on_error => {
                display::warn(&format!("Skipping organization {org_name}: {e}"));
                continue;
            }
            Err(e) => return Err(e),
        };
        debug!(org = %org_name, count = repos.len(), "repositories retained");

        for repo in &repos {
            report_open_pull_requests(client, repo, &settings.users, report).await?;
        }
    }

    info!("{} open pull request(s) found.", report.count());
    Ok(())
}
