use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::ledger::{ActivityProvider, QuotaProvider, TimesheetProvider, mock::MockLedger};

/// Shared across workers via `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub quotas: Arc<dyn QuotaProvider>,
    pub activity: Arc<dyn ActivityProvider>,
    pub timesheet: Arc<dyn TimesheetProvider>,
}

impl AppState {
    pub fn with_mock_ledger(config: &Config) -> Self {
        let ledger = Arc::new(MockLedger);

        Self {
            sessions: SessionStore::from_config(config),
            quotas: ledger.clone(),
            activity: ledger.clone(),
            timesheet: ledger,
        }
    }
}
