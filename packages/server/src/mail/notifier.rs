use std::sync::Arc;

use crate::config::MailConfig;
use crate::models::contact::ContactRequest;

use super::templates;
use super::{MailError, Mailer, OutgoingEmail};

/// Turns one contact submission into its two outbound emails: the operator
/// notification and the sender auto-reply.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    from: String,
    recipient: String,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, config: &MailConfig) -> Self {
        Self {
            mailer,
            from: config.username.clone(),
            recipient: config.recipient.clone(),
        }
    }

    /// Dispatch both emails concurrently as one all-or-report-error unit.
    ///
    /// Both sends are always attempted; the first failure is reported once
    /// both have settled. A partially delivered pair is not compensated,
    /// so a caller retry after an error may duplicate the send that
    /// succeeded.
    pub async fn notify(&self, submission: &ContactRequest) -> Result<(), MailError> {
        let notification = OutgoingEmail {
            from: self.from.clone(),
            to: self.recipient.clone(),
            subject: format!(
                "Portfolio Contact: {}",
                submission
                    .subject
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .unwrap_or("New Message")
            ),
            html: templates::notification_html(submission),
        };

        let auto_reply = OutgoingEmail {
            from: self.from.clone(),
            to: submission.email.clone(),
            subject: "Thank you for contacting me!".into(),
            html: templates::auto_reply_html(&submission.name),
        };

        let (notification_sent, reply_sent) = tokio::join!(
            self.mailer.send(&notification),
            self.mailer.send(&auto_reply),
        );

        notification_sent?;
        reply_sent?;
        Ok(())
    }
}
