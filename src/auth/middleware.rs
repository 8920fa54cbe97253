use crate::auth::session::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;
use actix_web::middleware::Next;
use actix_web::{
    Error, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use tracing::debug;

/// Lets API requests through only when the session cookie belongs to a
/// logged-in session.
pub async fn require_login(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let state = req
        .app_data::<Data<AppState>>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App state missing"))?;

    let session_id = match req.cookie(SESSION_COOKIE) {
        Some(c) => c.value().to_string(),
        None => {
            let resp = AppError::Unauthorized("Missing session cookie".to_string()).error_response();
            return Ok(req.into_response(resp));
        }
    };

    match state.sessions.get(&session_id).await {
        Some(session) if session.logged_in => next.call(req).await,
        _ => {
            debug!(path = %req.path(), "API call without a signed-in session");
            let resp = AppError::Unauthorized("Sign in required".to_string()).error_response();
            Ok(req.into_response(resp))
        }
    }
}
