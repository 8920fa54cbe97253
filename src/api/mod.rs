pub mod activity;
pub mod quota;
pub mod timesheet;
