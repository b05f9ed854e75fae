use std::time::Duration;

use serde_json::Value;

use crate::models::github::RepoRecord;

use super::GithubError;
use super::client::GithubClient;

/// Page size requested from the repository listing endpoint. A page with
/// fewer entries than this signals the last page.
pub const REPO_PAGE_SIZE: usize = 100;

/// Hard cap on pages fetched in one listing. The upstream is expected to
/// terminate pagination with a short page long before this.
pub const MAX_REPO_PAGES: usize = 20;

/// Pause between consecutive page requests, local to the listing loop.
const PAGE_DELAY: Duration = Duration::from_millis(100);

impl GithubClient {
    /// Fetch the configured user's public profile, unmodified.
    pub async fn fetch_user(&self) -> Result<Value, GithubError> {
        let response = self.get(&format!("/users/{}", self.username())).await?;
        Ok(response.json().await?)
    }

    /// Fetch every non-fork repository of the configured user.
    ///
    /// Pages of [`REPO_PAGE_SIZE`] sorted by most recently updated are
    /// fetched starting at page 1; forks are dropped per page and the
    /// survivors appended in arrival order. An empty or short page ends
    /// the listing. Any failed request aborts the whole listing with no
    /// partial result, and a listing that would exceed [`MAX_REPO_PAGES`]
    /// aborts rather than truncate.
    pub async fn list_repositories(&self) -> Result<Vec<RepoRecord>, GithubError> {
        let endpoint = format!("/users/{}/repos", self.username());
        let mut all = Vec::new();
        let mut page = 1usize;

        loop {
            let params = [
                ("per_page", REPO_PAGE_SIZE.to_string()),
                ("page", page.to_string()),
                ("sort", "updated".to_string()),
            ];
            let response = self.get_with_params(&endpoint, &params).await?;
            let repos: Vec<RepoRecord> = response.json().await?;

            let last_page = repos.len() < REPO_PAGE_SIZE;
            all.extend(repos.into_iter().filter(|repo| !repo.fork));

            if last_page {
                break;
            }
            if page >= MAX_REPO_PAGES {
                return Err(GithubError::PageLimit(MAX_REPO_PAGES));
            }
            page += 1;
            tokio::time::sleep(PAGE_DELAY).await;
        }

        Ok(all)
    }
}
