use crate::state::AppState;
use actix_web::{HttpResponse, web};

/// Recent leave activity, newest first
#[utoipa::path(
    get,
    path = "/api/v1/activity",
    responses(
        (status = 200, description = "Recent leave activity", body = [crate::model::activity::ActivityEntry]),
        (status = 401, description = "Not signed in")
    ),
    tag = "Activity"
)]
pub async fn recent_activity(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.activity.recent_activity())
}
