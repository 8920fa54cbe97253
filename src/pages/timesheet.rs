use super::layout::metric;
use crate::model::timesheet::{TimesheetEntry, TimesheetSummary};
use crate::utils::html::escape;

pub const EXPORT_MESSAGE: &str =
    "Timesheet export started (demo only). In real system, generate CSV file.";

pub fn render(summary: &TimesheetSummary, entries: &[TimesheetEntry]) -> String {
    let metrics: String = summary
        .metrics()
        .iter()
        .map(|m| metric(&m.label, &m.value, Some(&m.caption)))
        .collect();

    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td></tr>",
                entry.date.format("%Y-%m-%d"),
                escape(&entry.project),
                entry.hours,
                escape(&entry.note)
            )
        })
        .collect();

    format!(
        r#"<h2>Timesheet overview (preview)</h2>
<p class="caption">Simple mock view – connect to real data later.</p>
<div class="metrics">{metrics}</div>
<hr>
<h4>Recent timesheet entries</h4>
<table>
<thead><tr><th>Date</th><th>Project</th><th>Hours</th><th>Note</th></tr></thead>
<tbody>{rows}</tbody>
</table>
<form method="post" action="/timesheet/export"><p><button type="submit">Export CSV</button></p></form>"#
    )
}
