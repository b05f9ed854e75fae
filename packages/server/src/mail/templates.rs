use chrono::{Datelike, Utc};

use crate::models::contact::ContactRequest;

/// Render the operator notification body.
///
/// Every interpolated field is HTML-escaped; the source this service
/// replaces interpolated raw user input into the markup.
pub fn notification_html(submission: &ContactRequest) -> String {
    let subject = submission
        .subject
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("Not specified");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #4338ca; color: #ffffff; padding: 20px; border-radius: 10px 10px 0 0; text-align: center;">
    <h2>New Contact Form Submission</h2>
  </div>
  <div style="background: #f8fafc; padding: 20px; border-radius: 0 0 10px 10px;">
    <div style="margin-bottom: 15px; padding: 15px; background: #ffffff; border-radius: 8px;"><strong>Name:</strong> {name}</div>
    <div style="margin-bottom: 15px; padding: 15px; background: #ffffff; border-radius: 8px;"><strong>Email:</strong> {email}</div>
    <div style="margin-bottom: 15px; padding: 15px; background: #ffffff; border-radius: 8px;"><strong>Subject:</strong> {subject}</div>
    <div style="padding: 15px; background: #ffffff; border-radius: 8px;">
      <strong>Message:</strong>
      <p>{message}</p>
    </div>
    <div style="margin-top: 20px; text-align: center; color: #666666;">
      <p>This message was sent from your portfolio contact form.</p>
      <p>&copy; {year}</p>
    </div>
  </div>
</body>
</html>"#,
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        subject = escape_html(subject),
        message = escape_html(&submission.message),
        year = Utc::now().year(),
    )
}

/// Render the auto-reply body sent back to the submitter.
pub fn auto_reply_html(name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #4338ca; color: #ffffff; padding: 30px; border-radius: 10px 10px 0 0; text-align: center;">
    <h2>Thank You for Reaching Out!</h2>
  </div>
  <div style="background: #f8fafc; padding: 30px; border-radius: 0 0 10px 10px;">
    <div style="font-size: 1.2em; color: #4338ca; margin-bottom: 20px;">Hello {name},</div>
    <div style="background: #ffffff; padding: 20px; border-radius: 8px;">
      <p>Thank you for contacting me! I've received your message and will get back to you as soon as possible.</p>
      <p>In the meantime, feel free to browse my projects on GitHub.</p>
    </div>
    <div style="margin-top: 30px; text-align: center; color: #666666; font-size: 0.9em;">
      <p>Best regards</p>
      <p>&copy; {year} All rights reserved</p>
    </div>
  </div>
</body>
</html>"#,
        name = escape_html(name),
        year = Utc::now().year(),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
