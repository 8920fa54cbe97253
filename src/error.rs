use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Failures surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug, Display)]
pub enum AppError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),
    #[display(fmt = "{}", _0)]
    Unauthorized(String),
    #[display(fmt = "{}", _0)]
    NotFound(String),
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LeaveRequestIssue {
    #[display(fmt = "Please fill in the reason before submitting.")]
    MissingReason,
    #[display(fmt = "End date cannot be earlier than start date.")]
    EndBeforeStart,
}

/// Form validation failures. Shown inline; session state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Please enter both username and password.")]
    MissingCredentials,
    #[display(fmt = "{}", _0)]
    InvalidLeaveRequest(LeaveRequestIssue),
}

impl std::error::Error for ValidationError {}
