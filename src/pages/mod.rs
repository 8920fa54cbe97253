//! Server-rendered portal pages.
//!
//! Every interaction is one request: handlers apply the state change to the
//! caller's session, save it only when it changed, then answer with the full
//! page (or a 303 back to `/`, which renders it).

pub mod dashboard;
pub mod layout;
pub mod login;
pub mod request_leave;
pub mod timesheet;

use actix_web::{
    HttpResponse,
    cookie::Cookie,
    http::{StatusCode, header},
    web,
};
use chrono::{Local, NaiveDate};
use tracing::{info, instrument, warn};

use crate::auth::session::SessionHandle;
use crate::model::leave::{LeaveTypeKey, QuotaAdvisory};
use crate::model::session::{PageId, Session};
use crate::models::{LeaveRequestForm, NavigateForm, PageQuery};
use crate::state::AppState;
use layout::Notice;

pub const LEAVE_SUBMITTED: &str =
    "Leave request submitted. Waiting for DM and HR approval (mock workflow).";

/// Per-request inputs to a render cycle beyond the session itself.
#[derive(Debug, Default)]
pub struct ViewContext {
    pub notice: Option<Notice>,
    /// Username to refill on the login form
    pub login_username: String,
    /// Last submitted request form, echoed back into the fields
    pub leave_form: Option<LeaveRequestForm>,
    pub quota_key: Option<LeaveTypeKey>,
}

/// One render cycle: the login view when signed out, otherwise the
/// navigation frame around exactly one page.
pub fn render(state: &AppState, session: &Session, ctx: &ViewContext, today: NaiveDate) -> String {
    if !session.logged_in {
        return login::render(&ctx.login_username, ctx.notice.as_ref());
    }

    let content = match session.current_page {
        PageId::Dashboard => dashboard::render(
            &state.quotas.quotas(),
            &state.activity.recent_activity(),
            today,
        ),
        PageId::RequestLeave => {
            let form = ctx
                .leave_form
                .clone()
                .unwrap_or_else(|| LeaveRequestForm::blank(today));
            let key = ctx.quota_key.unwrap_or(form.leave_type);
            request_leave::render(&form, key, &state.quotas.quota(key))
        }
        PageId::Timesheet => {
            timesheet::render(&state.timesheet.summary(), &state.timesheet.entries())
        }
    };

    layout::app_shell(session.current_page, ctx.notice.as_ref(), &content)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Full-page response. `cookie` is only set when the handler just stored a
/// new session.
pub(crate) fn html(cookie: Option<Cookie<'static>>, status: StatusCode, body: String) -> HttpResponse {
    let mut builder = HttpResponse::build(status);
    builder.content_type("text/html; charset=utf-8");
    if let Some(cookie) = cookie {
        builder.cookie(cookie);
    }
    builder.body(body)
}

pub(crate) fn see_other(cookie: Option<Cookie<'static>>, location: &str) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    if let Some(cookie) = cookie {
        builder.cookie(cookie);
    }
    builder.finish()
}

// GET /
// Viewing changes nothing, so an anonymous visit is never stored.
pub async fn index(
    state: web::Data<AppState>,
    handle: SessionHandle,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let ctx = ViewContext {
        quota_key: query.leave_type,
        ..ViewContext::default()
    };
    let body = render(&state, &handle.session, &ctx, today());

    html(None, StatusCode::OK, body)
}

// POST /navigate
#[instrument(name = "navigate", skip_all, fields(page = form.page.as_ref()))]
pub async fn navigate(
    state: web::Data<AppState>,
    mut handle: SessionHandle,
    form: web::Form<NavigateForm>,
) -> HttpResponse {
    if !handle.session.logged_in {
        return see_other(None, "/");
    }

    if handle.session.current_page != form.page {
        handle.session.navigate(form.page);
        state.sessions.save(&handle).await;
    }

    see_other(None, "/")
}

// POST /leave
#[instrument(name = "submit_leave", skip_all, fields(leave_type = form.leave_type.as_ref()))]
pub async fn submit_leave(
    state: web::Data<AppState>,
    mut handle: SessionHandle,
    form: web::Form<LeaveRequestForm>,
) -> HttpResponse {
    if !handle.session.logged_in {
        return see_other(None, "/");
    }

    let form = form.into_inner();
    let draft = form.to_draft();

    let (status, notice) = match draft.validate() {
        Ok(()) => {
            let quota = state.quotas.quota(draft.leave_type);
            if QuotaAdvisory::for_quota(draft.leave_type, &quota).is_warning() {
                // advisory only: the low-quota policy is not enforced
                warn!(
                    remaining = quota.remaining,
                    "Accepted business leave while quota advisory is active"
                );
            }
            info!(
                date_from = %draft.date_from,
                date_to = %draft.date_to,
                half_day = draft.half_day,
                half_session = ?draft.half_session,
                has_attachment = draft.attachment.is_some(),
                "Leave request accepted"
            );
            if handle.session.current_page != PageId::RequestLeave {
                handle.session.navigate(PageId::RequestLeave);
                state.sessions.save(&handle).await;
            }
            (StatusCode::OK, Notice::success(LEAVE_SUBMITTED))
        }
        Err(e) => {
            info!(reason = %e, "Leave request rejected");
            (StatusCode::BAD_REQUEST, Notice::error(e.to_string()))
        }
    };

    // A rejected form is echoed on the request page without touching the
    // stored session.
    let mut view = handle.session.clone();
    view.navigate(PageId::RequestLeave);

    let ctx = ViewContext {
        notice: Some(notice),
        quota_key: Some(form.leave_type),
        leave_form: Some(form),
        ..ViewContext::default()
    };
    let body = render(&state, &view, &ctx, today());

    html(None, status, body)
}

// POST /timesheet/export
pub async fn export_timesheet(state: web::Data<AppState>, mut handle: SessionHandle) -> HttpResponse {
    if !handle.session.logged_in {
        return see_other(None, "/");
    }

    if handle.session.current_page != PageId::Timesheet {
        handle.session.navigate(PageId::Timesheet);
        state.sessions.save(&handle).await;
    }
    info!("Timesheet export requested (no file is produced)");

    let ctx = ViewContext {
        notice: Some(Notice::success(timesheet::EXPORT_MESSAGE)),
        ..ViewContext::default()
    };
    let body = render(&state, &handle.session, &ctx, today());

    html(None, StatusCode::OK, body)
}
