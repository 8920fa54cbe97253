use chrono::NaiveDate;

use super::layout::{NoticeKind, metric, notice_box, status_badge};
use crate::model::activity::ActivityEntry;
use crate::model::leave::{LeaveQuota, LeaveTypeKey};
use crate::model::session::PageId;
use crate::utils::html::escape;

const NOTIFICATIONS: [&str; 3] = [
    "✅ Leave approved by HR – Sick Leave · 03 Nov 2025",
    "⏳ Your new leave is waiting for DM approval.",
    "📤 Timesheet CSV export is ready.",
];

pub fn render(
    quotas: &[(LeaveTypeKey, LeaveQuota)],
    activity: &[ActivityEntry],
    today: NaiveDate,
) -> String {
    let cards: String = quotas
        .iter()
        .map(|(key, quota)| {
            metric(
                key.label(),
                &format!("{} / {} days", quota.remaining, quota.total),
                None,
            )
        })
        .collect();

    let items: String = activity
        .iter()
        .map(|item| {
            format!(
                r#"<div class="activity">
<p><strong>{}</strong></p>
<div class="columns"><span class="caption">{}</span><span>{}</span></div>
<hr>
</div>"#,
                escape(&item.title),
                escape(&item.detail),
                status_badge(item)
            )
        })
        .collect();

    let notifications: String = NOTIFICATIONS
        .iter()
        .map(|text| notice_box(NoticeKind::Info, text))
        .collect();

    format!(
        r#"<h2>Dashboard</h2>
<p class="caption">Your leave summary and recent activity</p>
<div class="metrics">{cards}</div>
<hr>
<div class="columns">
<section class="wide">
<h4>Recent leave activity</h4>
{items}
</section>
<aside>
<h4>Quick actions</h4>
<form method="post" action="/navigate">
<button type="submit" name="page" value="{}">➕ Request new leave</button>
</form>
<p class="caption">You can also review your recent approvals above.</p>
<h4>This month (mock calendar)</h4>
<p class="caption">Simple preview – real calendar UI can be integrated later.</p>
<p>📅 Today: {}</p>
<ul>
<li>🔵 <strong>Leave days</strong>: 7–9 Nov (Annual Leave)</li>
<li>🟢 <strong>Approved leave</strong>: 3 Nov (Sick Leave)</li>
<li>🔴 <strong>Rejected</strong>: 25 Oct (Business Leave)</li>
</ul>
<h4>Notifications</h4>
{notifications}
</aside>
</div>"#,
        PageId::RequestLeave.as_ref(),
        today.format("%d %b %Y")
    )
}
