use crate::error::AppError;
use crate::model::leave::{LeaveQuota, LeaveTypeKey, QuotaAdvisory};
use crate::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "leave_type": "business",
    "remaining": 1,
    "total": 5,
    "label": "Business Leave",
    "advisory": "low_business_quota",
    "message": "Your business leave quota is relatively low. If requested days exceed remaining quota, the system should block submission and ask you to contact HR."
}))]
pub struct QuotaResponse {
    pub leave_type: LeaveTypeKey,
    #[serde(flatten)]
    pub quota: LeaveQuota,
    pub advisory: QuotaAdvisory,
    /// advisory text as shown on the request page
    pub message: String,
}

impl QuotaResponse {
    fn new(leave_type: LeaveTypeKey, quota: LeaveQuota) -> Self {
        let advisory = QuotaAdvisory::for_quota(leave_type, &quota);
        Self {
            leave_type,
            quota,
            advisory,
            message: advisory.message().to_string(),
        }
    }
}

/// List every leave quota with its advisory
#[utoipa::path(
    get,
    path = "/api/v1/quota",
    responses(
        (status = 200, description = "All leave quotas", body = [QuotaResponse]),
        (status = 401, description = "Not signed in")
    ),
    tag = "Quota"
)]
pub async fn list_quotas(state: web::Data<AppState>) -> HttpResponse {
    let data: Vec<QuotaResponse> = state
        .quotas
        .quotas()
        .into_iter()
        .map(|(key, quota)| QuotaResponse::new(key, quota))
        .collect();

    HttpResponse::Ok().json(data)
}

/// Quota for one leave type
#[utoipa::path(
    get,
    path = "/api/v1/quota/{leave_type}",
    params(
        ("leave_type" = LeaveTypeKey, Path, description = "annual, sick or business")
    ),
    responses(
        (status = 200, description = "Quota found", body = QuotaResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Unknown leave type", body = Object, example = json!({
            "error": "Unknown leave type: unpaid"
        }))
    ),
    tag = "Quota"
)]
pub async fn get_quota(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let raw = path.into_inner();
    let key: LeaveTypeKey = raw
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown leave type: {raw}")))?;

    Ok(HttpResponse::Ok().json(QuotaResponse::new(key, state.quotas.quota(key))))
}
