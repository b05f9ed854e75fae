use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::contact::{ContactRequest, ContactResponse, validate_contact_request};
use crate::state::AppState;

/// Relay a contact form submission into email delivery.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    operation_id = "submitContact",
    summary = "Relay a contact form submission",
    description = "Validates the submission, then sends the operator notification and the \
        sender auto-reply concurrently. Delivery is best-effort: a reported failure may \
        still have delivered one of the two emails.",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Both emails dispatched", body = ContactResponse),
        (status = 400, description = "Missing required field (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Dispatch failed (MAIL_DISPATCH_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    validate_contact_request(&payload)?;

    state.notifier.notify(&payload).await.map_err(|e| {
        tracing::error!(error = %e, "Contact email dispatch failed");
        AppError::MailDispatch
    })?;

    Ok(Json(ContactResponse {
        message: "Message sent successfully!",
    }))
}
