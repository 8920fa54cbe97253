use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::error::{LeaveRequestIssue, ValidationError};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveTypeKey {
    #[default]
    Annual,
    Sick,
    Business,
}

impl LeaveTypeKey {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveTypeKey::Annual => "Annual Leave",
            LeaveTypeKey::Sick => "Sick Leave",
            LeaveTypeKey::Business => "Business Leave",
        }
    }
}

/// Remaining vs. total allotted days for one leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaveQuota {
    #[schema(example = 10)]
    pub remaining: u32,
    #[schema(example = 15)]
    pub total: u32,
    #[schema(example = "Annual Leave")]
    pub label: String,
}

/// Advisory shown under the quota figures on the request page.
///
/// The low business quota warning says submission should be blocked, but
/// nothing blocks it; callers only display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuotaAdvisory {
    LowBusinessQuota,
    MedicalCertificate,
    Sufficient,
}

impl QuotaAdvisory {
    pub fn for_quota(key: LeaveTypeKey, quota: &LeaveQuota) -> Self {
        if key == LeaveTypeKey::Business && quota.remaining <= 1 {
            QuotaAdvisory::LowBusinessQuota
        } else if key == LeaveTypeKey::Sick {
            QuotaAdvisory::MedicalCertificate
        } else {
            QuotaAdvisory::Sufficient
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            QuotaAdvisory::LowBusinessQuota => {
                "Your business leave quota is relatively low. \
                 If requested days exceed remaining quota, \
                 the system should block submission and ask you to contact HR."
            }
            QuotaAdvisory::MedicalCertificate => {
                "Sick leave may require a medical certificate for HR approval."
            }
            QuotaAdvisory::Sufficient => "You have enough quota for normal requests.",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, QuotaAdvisory::LowBusinessQuota)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum HalfSession {
    Am,
    Pm,
}

impl HalfSession {
    pub fn label(&self) -> &'static str {
        match self {
            HalfSession::Am => "Morning (AM)",
            HalfSession::Pm => "Afternoon (PM)",
        }
    }
}

/// A leave request as typed into the form. Lives for one submission only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequestDraft {
    pub leave_type: LeaveTypeKey,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub half_day: bool,
    pub half_session: Option<HalfSession>,
    pub reason: String,
    /// File name only; the content is never read.
    pub attachment: Option<String>,
}

impl LeaveRequestDraft {
    /// Reason is checked before the date range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reason.trim().is_empty() {
            return Err(ValidationError::InvalidLeaveRequest(
                LeaveRequestIssue::MissingReason,
            ));
        }

        if self.date_to < self.date_from {
            return Err(ValidationError::InvalidLeaveRequest(
                LeaveRequestIssue::EndBeforeStart,
            ));
        }

        Ok(())
    }
}
