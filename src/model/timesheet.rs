use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TimesheetEntry {
    #[schema(example = "2025-11-17", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Leave Portal Enhancement")]
    pub project: String,
    #[schema(example = 8.0)]
    pub hours: f32,
    #[schema(example = "UI refinement & testing")]
    pub note: String,
}

/// One headline figure with its caption, e.g. "168 h" / "This month".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimesheetMetric {
    pub label: String,
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimesheetSummary {
    pub total_hours: TimesheetMetric,
    pub average_per_day: TimesheetMetric,
    pub overtime: TimesheetMetric,
}

impl TimesheetSummary {
    pub fn metrics(&self) -> [&TimesheetMetric; 3] {
        [&self.total_hours, &self.average_per_day, &self.overtime]
    }
}
