use crate::model::timesheet::{TimesheetEntry, TimesheetSummary};
use crate::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct TimesheetResponse {
    pub summary: TimesheetSummary,
    pub entries: Vec<TimesheetEntry>,
}

/// Timesheet preview: headline metrics and recent entries
#[utoipa::path(
    get,
    path = "/api/v1/timesheet",
    responses(
        (status = 200, description = "Timesheet preview", body = TimesheetResponse),
        (status = 401, description = "Not signed in")
    ),
    tag = "Timesheet"
)]
pub async fn timesheet(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(TimesheetResponse {
        summary: state.timesheet.summary(),
        entries: state.timesheet.entries(),
    })
}
