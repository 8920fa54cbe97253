use crate::api::quota::QuotaResponse;
use crate::api::timesheet::TimesheetResponse;
use crate::model::activity::{ActivityEntry, ActivityStatus, ApprovalStage};
use crate::model::leave::{LeaveQuota, LeaveTypeKey, QuotaAdvisory};
use crate::model::timesheet::{TimesheetEntry, TimesheetMetric, TimesheetSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave & Time Portal API",
        version = "0.1.0",
        description = r#"
## Leave & Time Portal (prototype)

Read-only JSON view of the data behind the portal pages.

### 🔹 Endpoints
- **Quota**: remaining / total days per leave type, with the advisory shown on the request page
- **Activity**: recent leave requests and their approval status
- **Timesheet**: headline metrics and recent entries

### 🔐 Access
Sign in through the portal first; the API reads the `portal_session` cookie.

All data is mock data. Nothing is persisted.
"#,
    ),
    paths(
        crate::api::quota::list_quotas,
        crate::api::quota::get_quota,
        crate::api::activity::recent_activity,
        crate::api::timesheet::timesheet,
    ),
    components(
        schemas(
            QuotaResponse,
            LeaveQuota,
            LeaveTypeKey,
            QuotaAdvisory,
            ActivityEntry,
            ActivityStatus,
            ApprovalStage,
            TimesheetResponse,
            TimesheetSummary,
            TimesheetMetric,
            TimesheetEntry
        )
    ),
    tags(
        (name = "Quota", description = "Leave quota lookups"),
        (name = "Activity", description = "Recent leave activity"),
        (name = "Timesheet", description = "Timesheet preview"),
    )
)]
pub struct ApiDoc;
