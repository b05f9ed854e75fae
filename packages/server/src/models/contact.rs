use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Contact form submission relayed into email delivery.
///
/// Lives only for the duration of one request; nothing is persisted.
/// Required fields default to empty so an absent field and a blank one
/// produce the same validation error.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ContactRequest {
    /// Sender's name.
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Sender's address; also receives the auto-reply.
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Optional subject line for the notification email.
    #[schema(example = "Freelance inquiry")]
    pub subject: Option<String>,
    /// Message body.
    #[serde(default)]
    #[schema(example = "I'd like to talk about a project.")]
    pub message: String,
}

pub fn validate_contact_request(payload: &ContactRequest) -> Result<(), AppError> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Please fill in all required fields".into(),
        ));
    }
    Ok(())
}

/// Successful contact relay response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ContactResponse {
    #[schema(example = "Message sent successfully!")]
    pub message: &'static str,
}
