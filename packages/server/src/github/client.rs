use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Serialize;

use crate::config::GithubConfig;

use super::GithubError;

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Thin GitHub REST client.
///
/// Requests carry the versioned Accept header, and the bearer token when one
/// is configured; without a token GitHub still answers, at a lower rate
/// limit. The base URL comes from configuration so tests can point it at a
/// local stand-in. GitHub rejects requests without a User-Agent, so one is
/// set explicitly (reqwest sends none by default).
pub struct GithubClient {
    http: Client,
    base_url: String,
    username: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        if !config.token.is_empty() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", config.token))
                    .map_err(|_| GithubError::InvalidToken)?,
            );
        }
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(USER_AGENT, HeaderValue::from_static("portfolio-backend"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            username: config.username.clone(),
        })
    }

    /// Account whose profile and repositories are proxied.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(super) async fn get(&self, endpoint: &str) -> Result<Response, GithubError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send().await?;
        Self::check_status(response)
    }

    pub(super) async fn get_with_params<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response, GithubError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).query(params).send().await?;
        Self::check_status(response)
    }

    fn check_status(response: Response) -> Result<Response, GithubError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(GithubError::Status {
                status,
                url: response.url().to_string(),
            })
        }
    }
}
