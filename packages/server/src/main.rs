use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{Level, info};

use server::cache::GithubCache;
use server::config::AppConfig;
use server::github::GithubClient;
use server::mail::{Mailer, Notifier, SmtpMailer};
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let github =
        Arc::new(GithubClient::new(&config.github).context("Failed to build GitHub client")?);
    let mailer: Arc<dyn Mailer> =
        Arc::new(SmtpMailer::new(&config.mail).context("Failed to build SMTP transport")?);
    let notifier = Notifier::new(mailer, &config.mail);

    info!(
        username = %config.github.username,
        recipient = %config.mail.recipient,
        "Configuration loaded"
    );

    let state = AppState {
        config: Arc::new(config),
        github,
        cache: Arc::new(GithubCache::default()),
        notifier,
    };

    let app = server::build_router(state);

    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
