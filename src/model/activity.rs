use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Pending,
    Approved,
    Rejected,
}

/// DM reviews first, then HR reviews and deducts the quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStage {
    Dm,
    Hr,
}

impl ApprovalStage {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStage::Dm => "DM",
            ApprovalStage::Hr => "HR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActivityEntry {
    #[schema(example = "Annual Leave · 10–12 Nov 2025")]
    pub title: String,
    pub status: ActivityStatus,
    /// Stage a pending request is waiting on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awaiting: Option<ApprovalStage>,
    #[schema(example = "Waiting for DM approval")]
    pub detail: String,
}

impl ActivityEntry {
    /// Badge text, e.g. "Pending DM" or "Approved".
    pub fn status_label(&self) -> String {
        match (self.status, self.awaiting) {
            (ActivityStatus::Pending, Some(stage)) => format!("Pending {}", stage.label()),
            (ActivityStatus::Pending, None) => "Pending".to_string(),
            (ActivityStatus::Approved, _) => "Approved".to_string(),
            (ActivityStatus::Rejected, _) => "Rejected".to_string(),
        }
    }
}
