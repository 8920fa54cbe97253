//! Read-side collaborators for quota, activity and timesheet data.
//!
//! A deployment would back these with the leave ledger and timesheet
//! services; the portal only ships the in-memory [`mock::MockLedger`].

pub mod mock;

use crate::model::{
    activity::ActivityEntry,
    leave::{LeaveQuota, LeaveTypeKey},
    timesheet::{TimesheetEntry, TimesheetSummary},
};

pub trait QuotaProvider: Send + Sync {
    fn quota(&self, key: LeaveTypeKey) -> LeaveQuota;

    /// All quotas, in leave type order
    fn quotas(&self) -> Vec<(LeaveTypeKey, LeaveQuota)>;
}

pub trait ActivityProvider: Send + Sync {
    /// Most recent first
    fn recent_activity(&self) -> Vec<ActivityEntry>;
}

pub trait TimesheetProvider: Send + Sync {
    fn entries(&self) -> Vec<TimesheetEntry>;
    fn summary(&self) -> TimesheetSummary;
}
