use crate::{
    auth::session::SessionHandle,
    error::ValidationError,
    models::LoginForm,
    pages::{self, ViewContext, layout::Notice},
    state::AppState,
};
use actix_web::{HttpResponse, http::StatusCode, web};
use tracing::{debug, info, instrument};

pub const SIGNED_IN: &str = "Signed in successfully. Welcome to Leave & Time Portal.";

/// Placeholder policy: any pair of non-blank values is accepted. Real
/// credential checks belong to the identity provider.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

// #[post("/login")]
#[instrument(
    name = "portal_login",
    skip(state, handle, form),
    fields(username = %form.username.trim())
)]
pub async fn login(
    state: web::Data<AppState>,
    mut handle: SessionHandle,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    info!("Login request received");

    let (status, ctx, cookie) = match validate_credentials(&form.username, &form.password) {
        Ok(()) => {
            handle.session.log_in();
            state.sessions.save(&handle).await;
            debug!(remember = form.remember.is_some(), "Session signed in");
            info!("Login successful");
            (
                StatusCode::OK,
                ViewContext {
                    notice: Some(Notice::success(SIGNED_IN)),
                    ..ViewContext::default()
                },
                handle.cookie(),
            )
        }
        Err(e) => {
            info!("Validation failed: empty username or password");
            (
                StatusCode::BAD_REQUEST,
                ViewContext {
                    notice: Some(Notice::error(e.to_string())),
                    login_username: form.username.clone(),
                    ..ViewContext::default()
                },
                None,
            )
        }
    };

    let body = pages::render(&state, &handle.session, &ctx, pages::today());
    pages::html(cookie, status, body)
}

// #[post("/logout")]
pub async fn logout(state: web::Data<AppState>, mut handle: SessionHandle) -> HttpResponse {
    if handle.session.logged_in {
        info!(page = handle.session.current_page.as_ref(), "Logging out");
        handle.session.log_out();
        state.sessions.save(&handle).await;
    }

    pages::see_other(None, "/")
}
