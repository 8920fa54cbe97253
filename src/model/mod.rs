pub mod activity;
pub mod leave;
pub mod session;
pub mod timesheet;
