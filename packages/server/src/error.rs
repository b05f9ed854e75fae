use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `UPSTREAM_FETCH_FAILED`, `MAIL_DISPATCH_FAILED`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Please fill in all required fields")]
    pub message: String,
}

/// Application-level error type.
///
/// Upstream and mail failures deliberately collapse to one generic message
/// per route; the underlying cause is logged where the call happened and
/// never surfaced to the client.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// Carries the client-facing message for the failed GitHub fetch.
    UpstreamFetch(&'static str),
    MailDispatch,
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::UpstreamFetch(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    code: "UPSTREAM_FETCH_FAILED",
                    message: msg.into(),
                },
            ),
            AppError::MailDispatch => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    code: "MAIL_DISPATCH_FAILED",
                    message: "Failed to send message. Please try again later.".into(),
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
