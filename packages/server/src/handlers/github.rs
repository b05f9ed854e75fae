use axum::{Json, extract::State};
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::github::RepoRecord;
use crate::state::AppState;

/// Serve the configured user's GitHub profile, cached for one hour.
#[utoipa::path(
    get,
    path = "/github/user",
    tag = "GitHub",
    operation_id = "getGithubUser",
    summary = "Get the proxied GitHub profile",
    description = "Returns the profile exactly as GitHub serves it. A fresh cached copy is \
        returned without touching the upstream; otherwise the profile is fetched and cached.",
    responses(
        (status = 200, description = "Profile JSON", body = serde_json::Value),
        (status = 500, description = "Upstream failure (UPSTREAM_FETCH_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_user(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    if let Some(user) = state.cache.user.get_fresh()? {
        return Ok(Json(user));
    }

    let user = state.github.fetch_user().await.map_err(|e| {
        tracing::error!(error = %e, "GitHub user fetch failed");
        AppError::UpstreamFetch("Failed to fetch GitHub user data")
    })?;

    state.cache.user.store(user.clone())?;
    Ok(Json(user))
}

/// Serve the configured user's non-fork repositories, cached for one hour.
#[utoipa::path(
    get,
    path = "/github/repos",
    tag = "GitHub",
    operation_id = "listGithubRepos",
    summary = "List the proxied GitHub repositories",
    description = "Returns every non-fork repository sorted by most recent update, paginated \
        out of GitHub on a cache miss and served from the cache while fresh.",
    responses(
        (status = 200, description = "Repository records", body = Vec<serde_json::Value>),
        (status = 500, description = "Upstream failure (UPSTREAM_FETCH_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_repos(State(state): State<AppState>) -> Result<Json<Vec<RepoRecord>>, AppError> {
    if let Some(repos) = state.cache.repos.get_fresh()? {
        return Ok(Json(repos));
    }

    let repos = state.github.list_repositories().await.map_err(|e| {
        tracing::error!(error = %e, "GitHub repository listing failed");
        AppError::UpstreamFetch("Failed to fetch GitHub repositories")
    })?;

    state.cache.repos.store(repos.clone())?;
    Ok(Json(repos))
}
