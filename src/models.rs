use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    leave::{HalfSession, LeaveRequestDraft, LeaveTypeKey},
    session::PageId,
};

#[derive(Deserialize, Serialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Decorative; sessions behave the same either way.
    #[serde(default)]
    pub remember: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct NavigateForm {
    pub page: PageId,
}

/// Raw request-leave form body. Checkboxes arrive as `on` or not at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeaveRequestForm {
    pub leave_type: LeaveTypeKey,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    #[serde(default)]
    pub half_day: Option<String>,
    #[serde(default)]
    pub half_session: Option<HalfSession>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub attachment: Option<String>,
}

impl LeaveRequestForm {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            leave_type: LeaveTypeKey::default(),
            date_from: today,
            date_to: today,
            half_day: None,
            half_session: None,
            reason: String::new(),
            attachment: None,
        }
    }

    pub fn is_half_day(&self) -> bool {
        self.half_day.is_some()
    }

    pub fn to_draft(&self) -> LeaveRequestDraft {
        let half_day = self.is_half_day();

        LeaveRequestDraft {
            leave_type: self.leave_type,
            date_from: self.date_from,
            date_to: self.date_to,
            half_day,
            half_session: if half_day {
                Some(self.half_session.unwrap_or(HalfSession::Am))
            } else {
                None
            },
            reason: self.reason.clone(),
            attachment: self
                .attachment
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        }
    }
}

/// Query string accepted by `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Leave type shown in the quota panel
    #[serde(rename = "type")]
    pub leave_type: Option<LeaveTypeKey>,
}
