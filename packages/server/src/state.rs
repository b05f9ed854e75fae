use std::sync::Arc;

use crate::cache::GithubCache;
use crate::config::AppConfig;
use crate::github::GithubClient;
use crate::mail::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub github: Arc<GithubClient>,
    pub cache: Arc<GithubCache>,
    pub notifier: Notifier,
}
