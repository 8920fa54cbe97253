use strum::IntoEnumIterator;

use super::layout::{NoticeKind, metric, notice_box};
use crate::model::leave::{HalfSession, LeaveQuota, LeaveTypeKey, QuotaAdvisory};
use crate::models::LeaveRequestForm;
use crate::utils::html::{escape, flag};

fn leave_type_options(selected: LeaveTypeKey) -> String {
    LeaveTypeKey::iter()
        .map(|key| {
            format!(
                r#"<option value="{}" {}>{}</option>"#,
                key.as_ref(),
                flag(key == selected, "selected"),
                key.label()
            )
        })
        .collect()
}

fn half_session_options(selected: Option<HalfSession>) -> String {
    HalfSession::iter()
        .map(|half| {
            let value = match half {
                HalfSession::Am => "am",
                HalfSession::Pm => "pm",
            };
            format!(
                r#"<option value="{value}" {}>{}</option>"#,
                flag(Some(half) == selected, "selected"),
                half.label()
            )
        })
        .collect()
}

fn request_form(form: &LeaveRequestForm) -> String {
    format!(
        r#"<form method="post" action="/leave">
<label>Leave type <select name="leave_type">{}</select></label>
<div class="columns">
<label>From <input type="date" name="date_from" value="{}" required></label>
<label>To <input type="date" name="date_to" value="{}" required></label>
</div>
<label><input type="checkbox" name="half_day" {}> Half day</label>
<label class="half-session">Session <select name="half_session">{}</select></label>
<label>Reason <textarea name="reason" rows="4" placeholder="e.g. Personal errands, family matters, or medical check-up.">{}</textarea></label>
<label>Attachment (optional) <input type="file" name="attachment"></label>
<p><button type="submit">Submit request</button></p>
</form>"#,
        leave_type_options(form.leave_type),
        form.date_from.format("%Y-%m-%d"),
        form.date_to.format("%Y-%m-%d"),
        flag(form.is_half_day(), "checked"),
        half_session_options(form.half_session),
        escape(&form.reason),
    )
}

fn quota_panel(key: LeaveTypeKey, quota: &LeaveQuota) -> String {
    let advisory = QuotaAdvisory::for_quota(key, quota);
    let kind = if advisory.is_warning() {
        NoticeKind::Warning
    } else {
        NoticeKind::Info
    };
    let icon = match advisory {
        QuotaAdvisory::LowBusinessQuota => "⚠️",
        QuotaAdvisory::MedicalCertificate => "💊",
        QuotaAdvisory::Sufficient => "✅",
    };

    format!(
        r#"<h4>Leave quota overview</h4>
<form method="get" action="/">
<select name="type" aria-label="Leave type">{}</select>
<button type="submit">Show quota</button>
</form>
<p class="caption">{}</p>
<div class="metrics">{}{}</div>
{}"#,
        leave_type_options(key),
        escape(&quota.label),
        metric("Remaining", &format!("{} days", quota.remaining), None),
        metric("Total", &format!("{} days", quota.total), None),
        notice_box(kind, &format!("{icon} {}", advisory.message())),
    )
}

pub fn render(form: &LeaveRequestForm, quota_key: LeaveTypeKey, quota: &LeaveQuota) -> String {
    format!(
        r#"<h2>Request new leave</h2>
<p class="caption">Fill in details and submit for approval.</p>
<div class="columns">
<section class="wide">
{}
</section>
<aside>
{}
<h4>Approval flow</h4>
<ol>
<li>Request goes to your <strong>DM</strong> for review.</li>
<li>After DM approval, <strong>HR</strong> will review and deduct leave quota.</li>
<li>You receive notifications at every step.</li>
</ol>
</aside>
</div>"#,
        request_form(form),
        quota_panel(quota_key, quota)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{QuotaProvider, mock::MockLedger};
    use chrono::NaiveDate;

    fn blank() -> LeaveRequestForm {
        LeaveRequestForm::blank(NaiveDate::from_ymd_opt(2025, 11, 10).unwrap())
    }

    fn page_for(key: LeaveTypeKey) -> String {
        render(&blank(), key, &MockLedger.quota(key))
    }

    #[test]
    fn dates_default_to_given_day() {
        let html = page_for(LeaveTypeKey::Annual);
        assert!(html.contains(r#"name="date_from" value="2025-11-10""#));
        assert!(html.contains(r#"name="date_to" value="2025-11-10""#));
    }

    #[test]
    fn business_panel_shows_blocking_warning() {
        let html = page_for(LeaveTypeKey::Business);
        assert!(html.contains(r#"class="notice warning""#));
        assert!(html.contains("should block submission"));
        assert!(html.contains("1 days"));
    }

    #[test]
    fn sick_panel_mentions_certificate() {
        let html = page_for(LeaveTypeKey::Sick);
        assert!(html.contains("medical certificate"));
        assert!(!html.contains(r#"class="notice warning""#));
    }

    #[test]
    fn submitted_values_are_echoed() {
        let mut form = blank();
        form.leave_type = LeaveTypeKey::Sick;
        form.half_day = Some("on".to_string());
        form.half_session = Some(HalfSession::Pm);
        form.reason = "<flu>".to_string();

        let html = render(&form, form.leave_type, &MockLedger.quota(form.leave_type));
        assert!(html.contains(r#"<option value="sick" selected>"#));
        assert!(html.contains(r#"name="half_day" checked"#));
        assert!(html.contains(r#"<option value="pm" selected>"#));
        assert!(html.contains("&lt;flu&gt;</textarea>"));
    }
}
