use strum::IntoEnumIterator;

use crate::model::activity::{ActivityEntry, ActivityStatus};
use crate::model::session::PageId;
use crate::utils::html::escape;

pub const APP_TITLE: &str = "Leave & Time Portal";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #0f172a; background: #f8fafc; }
.app { display: flex; min-height: 100vh; }
.sidebar { width: 220px; padding: 24px 16px; background: #fff; border-right: 1px solid #e2e8f0; }
.sidebar button { display: block; width: 100%; margin: 4px 0; padding: 8px; text-align: left;
  background: none; border: 1px solid transparent; border-radius: 6px; cursor: pointer; }
.sidebar button.active { background: #eef2ff; border-color: #6366f1; font-weight: 600; }
main { flex: 1; padding: 24px 32px; }
.caption { color: #64748b; font-size: 13px; }
.columns { display: flex; gap: 32px; }
.columns > * { flex: 1; }
.columns > .wide { flex: 1.5; }
.metrics { display: flex; gap: 16px; }
.metric { flex: 1; padding: 12px 16px; background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; }
.metric .value { font-size: 24px; font-weight: 600; }
.notice { padding: 10px 14px; border-radius: 6px; margin: 12px 0; }
.notice.success { background: #dcfce7; color: #166534; }
.notice.error { background: #fee2e2; color: #b91c1c; }
.notice.info { background: #e0f2fe; color: #075985; }
.notice.warning { background: #fef9c3; color: #854d0e; }
.badge { border-radius: 999px; padding: 2px 8px; font-size: 11px; border: 1px solid; }
.badge.pending { background: #fef9c3; border-color: #facc15; color: #854d0e; }
.badge.approved { background: #dcfce7; border-color: #22c55e; color: #166534; }
.badge.rejected { background: #fee2e2; border-color: #f97373; color: #b91c1c; }
label { display: block; margin-top: 10px; font-size: 14px; }
input[type=text], input[type=password], input[type=date], select, textarea { width: 100%; padding: 6px; }
.half-session { display: none; }
form:has(input[name=half_day]:checked) .half-session { display: block; }
table { border-collapse: collapse; width: 100%; background: #fff; }
th, td { border-bottom: 1px solid #e2e8f0; padding: 8px; text-align: left; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
        }
    }
}

/// One-shot message rendered above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

pub fn notice_box(kind: NoticeKind, text: &str) -> String {
    format!(r#"<div class="notice {}">{}</div>"#, kind.class(), escape(text))
}

pub fn render_notice(notice: Option<&Notice>) -> String {
    notice
        .map(|n| notice_box(n.kind, &n.text))
        .unwrap_or_default()
}

pub fn metric(label: &str, value: &str, caption: Option<&str>) -> String {
    let caption = caption
        .map(|c| format!(r#"<div class="caption">{}</div>"#, escape(c)))
        .unwrap_or_default();
    format!(
        r#"<div class="metric"><div class="caption">{}</div><div class="value">{}</div>{}</div>"#,
        escape(label),
        escape(value),
        caption
    )
}

pub fn status_badge(entry: &ActivityEntry) -> String {
    let (class, glyph) = match entry.status {
        ActivityStatus::Pending => ("pending", "●"),
        ActivityStatus::Approved => ("approved", "✓"),
        ActivityStatus::Rejected => ("rejected", "!"),
    };
    format!(
        r#"<span class="badge {class}">{glyph} {}</span>"#,
        escape(&entry.status_label())
    )
}

pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{} · {APP_TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        escape(title)
    )
}

fn sidebar(current: PageId) -> String {
    let buttons: String = PageId::iter()
        .map(|page| {
            let class = if page == current { r#" class="active""# } else { "" };
            format!(
                r#"<button type="submit" name="page" value="{}"{class}>{}</button>"#,
                page.as_ref(),
                page.title()
            )
        })
        .collect();

    format!(
        r#"<nav class="sidebar">
<h3>🗓️ {APP_TITLE}</h3>
<form method="post" action="/navigate" aria-label="Navigation">{buttons}</form>
<hr>
<p class="caption">Role: Employee (demo)</p>
<form method="post" action="/logout"><button type="submit">Log out</button></form>
</nav>"#
    )
}

/// Signed-in frame: navigation sidebar plus the active page.
pub fn app_shell(current: PageId, notice: Option<&Notice>, content: &str) -> String {
    let body = format!(
        r#"<div class="app">
{}
<main>
{}
{content}
</main>
</div>"#,
        sidebar(current),
        render_notice(notice)
    );
    document(current.title(), &body)
}
