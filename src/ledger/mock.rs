use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use super::{ActivityProvider, QuotaProvider, TimesheetProvider};
use crate::model::{
    activity::{ActivityEntry, ActivityStatus, ApprovalStage},
    leave::{LeaveQuota, LeaveTypeKey},
    timesheet::{TimesheetEntry, TimesheetMetric, TimesheetSummary},
};

static MOCK_QUOTA: Lazy<BTreeMap<LeaveTypeKey, LeaveQuota>> = Lazy::new(|| {
    [
        (LeaveTypeKey::Annual, 10, 15),
        (LeaveTypeKey::Sick, 2, 10),
        (LeaveTypeKey::Business, 1, 5),
    ]
    .into_iter()
    .map(|(key, remaining, total)| {
        (
            key,
            LeaveQuota {
                remaining,
                total,
                label: key.label().to_string(),
            },
        )
    })
    .collect()
});

static MOCK_ACTIVITY: Lazy<Vec<ActivityEntry>> = Lazy::new(|| {
    vec![
        ActivityEntry {
            title: "Annual Leave · 10–12 Nov 2025".to_string(),
            status: ActivityStatus::Pending,
            awaiting: Some(ApprovalStage::Dm),
            detail: "Waiting for DM approval".to_string(),
        },
        ActivityEntry {
            title: "Sick Leave · 03 Nov 2025".to_string(),
            status: ActivityStatus::Approved,
            awaiting: None,
            detail: "Approved by DM & HR".to_string(),
        },
        ActivityEntry {
            title: "Business Leave · 25 Oct 2025".to_string(),
            status: ActivityStatus::Rejected,
            awaiting: None,
            detail: "Rejected · insufficient detail".to_string(),
        },
    ]
});

static MOCK_TIMESHEET: Lazy<Vec<TimesheetEntry>> = Lazy::new(|| {
    [
        ((2025, 11, 17), "Leave Portal Enhancement", 8.0, "UI refinement & testing"),
        ((2025, 11, 16), "Core HR Integration", 7.5, "API mapping & review"),
        ((2025, 11, 15), "Meeting & Planning", 8.0, "Sprint planning"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), project, hours, note)| {
        Some(TimesheetEntry {
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            project: project.to_string(),
            hours,
            note: note.to_string(),
        })
    })
    .collect()
});

fn metric(label: &str, value: &str, caption: &str) -> TimesheetMetric {
    TimesheetMetric {
        label: label.to_string(),
        value: value.to_string(),
        caption: caption.to_string(),
    }
}

/// Fixed demo data standing in for the leave ledger and timesheet store.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockLedger;

impl QuotaProvider for MockLedger {
    fn quota(&self, key: LeaveTypeKey) -> LeaveQuota {
        MOCK_QUOTA.get(&key).cloned().unwrap_or_else(|| LeaveQuota {
            remaining: 0,
            total: 0,
            label: key.label().to_string(),
        })
    }

    fn quotas(&self) -> Vec<(LeaveTypeKey, LeaveQuota)> {
        LeaveTypeKey::iter().map(|key| (key, self.quota(key))).collect()
    }
}

impl ActivityProvider for MockLedger {
    fn recent_activity(&self) -> Vec<ActivityEntry> {
        MOCK_ACTIVITY.clone()
    }
}

impl TimesheetProvider for MockLedger {
    fn entries(&self) -> Vec<TimesheetEntry> {
        MOCK_TIMESHEET.clone()
    }

    fn summary(&self) -> TimesheetSummary {
        TimesheetSummary {
            total_hours: metric("Total hours", "168 h", "This month"),
            average_per_day: metric("Average / day", "8.0 h", "Mon–Fri"),
            overtime: metric("Overtime", "6 h", "Logged as OT"),
        }
    }
}
