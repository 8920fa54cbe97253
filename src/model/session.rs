use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The three pages reachable from the navigation sidebar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PageId {
    #[default]
    Dashboard,
    RequestLeave,
    Timesheet,
}

impl PageId {
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::RequestLeave => "Request Leave",
            PageId::Timesheet => "Timesheet",
        }
    }
}

/// Per-browser session state. A fresh session starts logged out on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub current_page: PageId,
}

impl Session {
    pub fn log_in(&mut self) {
        self.logged_in = true;
    }

    /// Leaves `current_page` untouched; the login view is forced regardless.
    pub fn log_out(&mut self) {
        self.logged_in = false;
    }

    pub fn navigate(&mut self, page: PageId) {
        self.current_page = page;
    }
}
