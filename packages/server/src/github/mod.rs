pub mod client;
pub mod endpoints;

pub use client::GithubClient;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid GitHub token in configuration")]
    InvalidToken,

    #[error("Repository listing exceeded {0} pages")]
    PageLimit(usize),
}
