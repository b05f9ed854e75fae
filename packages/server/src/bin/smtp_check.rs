//! Sends two test emails through the configured SMTP account so credentials
//! can be verified before the contact form goes live.
//!
//! Run with `cargo run --bin smtp_check`. Both messages go to the configured
//! recipient: one shaped like a contact notification, one like the auto-reply.

use anyhow::Context;
use tracing::{Level, info};

use server::config::AppConfig;
use server::mail::{Mailer, OutgoingEmail, SmtpMailer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;
    info!(username = %config.mail.username, "Testing email configuration");

    let mailer = SmtpMailer::new(&config.mail).context("Failed to build SMTP transport")?;

    let notification = OutgoingEmail {
        from: config.mail.username.clone(),
        to: config.mail.recipient.clone(),
        subject: "Test Email - Portfolio Contact Form".to_string(),
        html: "<h2>Test Email</h2>\
               <p>If you received this, the contact form can deliver notifications.</p>"
            .to_string(),
    };
    mailer
        .send(&notification)
        .await
        .context("Test email failed; check the SMTP username and app password")?;
    info!("Test email sent successfully");

    let auto_reply = OutgoingEmail {
        from: config.mail.username.clone(),
        to: config.mail.recipient.clone(),
        subject: "Auto-Reply Test - Thank you for testing!".to_string(),
        html: "<h2>Thank You for Reaching Out!</h2>\
               <p>This is the confirmation submitters receive after using the form.</p>"
            .to_string(),
    };
    mailer
        .send(&auto_reply)
        .await
        .context("Auto-reply test failed; check the SMTP username and app password")?;
    info!("Auto-reply test sent successfully");

    info!("All email tests passed");
    Ok(())
}
