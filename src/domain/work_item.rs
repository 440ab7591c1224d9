use crate::domain::lead::LeadStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status derived from the lane a card currently sits in.
///
/// Same domain as [`LeadStatus`] plus `Unknown` for lanes outside the
/// mapping table. `Unknown` is non-authoritative; callers must never
/// overwrite lead state from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkItemStatus {
    New,
    Contacted,
    Qualified,
    Lost,
    Unknown,
}

impl WorkItemStatus {
    /// Returns the wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Contacted => "CONTACTED",
            Self::Qualified => "QUALIFIED",
            Self::Lost => "LOST",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for WorkItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<LeadStatus> for WorkItemStatus {
    fn from(status: LeadStatus) -> Self {
        match status {
            LeadStatus::New => Self::New,
            LeadStatus::Contacted => Self::Contacted,
            LeadStatus::Qualified => Self::Qualified,
            LeadStatus::Lost => Self::Lost,
        }
    }
}

/// A card on the work board, viewed through the lead pipeline vocabulary.
///
/// `lane` is `None` when the holding lane cannot be resolved against the
/// adapter's cached lane set; the derived status is then `Unknown`.
/// `linked_lead_id` is extracted from the card description and absent when
/// no correlation marker is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub status: WorkItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_lead_id: Option<String>,
}
