use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorInternalServerError, web::Data};
use futures::future::LocalBoxFuture;

use crate::auth::session::{SESSION_COOKIE, SessionHandle};
use crate::state::AppState;

impl FromRequest for SessionHandle {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<Data<AppState>>().cloned();
        let cookie_id = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let state = state.ok_or_else(|| ErrorInternalServerError("App state missing"))?;
            Ok(state.sessions.load(cookie_id.as_deref()).await)
        })
    }
}
