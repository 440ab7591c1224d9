use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Pipeline status of a lead.
///
/// The serialized form is the uppercase token stored in the tracker's
/// status cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
}

impl LeadStatus {
    /// Returns the wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Contacted => "CONTACTED",
            Self::Qualified => "QUALIFIED",
            Self::Lost => "LOST",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = crate::error::SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Self::New),
            "CONTACTED" => Ok(Self::Contacted),
            "QUALIFIED" => Ok(Self::Qualified),
            "LOST" => Ok(Self::Lost),
            _ => Err(crate::error::SyncError::InvalidStatus(s.to_string())),
        }
    }
}

/// A lead record as stored in the tracker.
///
/// Leads are never deleted, only moved to a terminal status. The id is a
/// stringified sequence number assigned at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: LeadStatus,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_work_item_id: Option<String>,
}

/// Input for creating a lead.
///
/// `name` and `email` must be non-empty; the work-item link always starts
/// out empty and is set later via [`LeadPatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub status: LeadStatus,
    #[serde(default)]
    pub source: String,
}

/// Field-level update for a lead. Fields left as `None` are untouched.
///
/// Writing `Some("")` to `linked_work_item_id` clears the link cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<LeadStatus>,
    pub source: Option<String>,
    pub linked_work_item_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens_round_trip() {
        for status in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Lost,
        ] {
            assert_eq!(status.as_str().parse::<LeadStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown_tokens() {
        assert!("ARCHIVED".parse::<LeadStatus>().is_err());
        assert!("new".parse::<LeadStatus>().is_err());
        assert!("".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_uppercase_tokens() {
        let json = serde_json::to_string(&LeadStatus::Contacted).unwrap();
        assert_eq!(json, "\"CONTACTED\"");

        let status: LeadStatus = serde_json::from_str("\"LOST\"").unwrap();
        assert_eq!(status, LeadStatus::Lost);
    }

    #[test]
    fn test_lead_serialization_omits_empty_link() {
        let lead = Lead {
            id: "1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            status: LeadStatus::New,
            source: "referral".to_string(),
            linked_work_item_id: None,
        };

        let json = serde_json::to_string(&lead).unwrap();
        assert!(!json.contains("linked_work_item_id"));

        let back: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "1");
        assert!(back.linked_work_item_id.is_none());
    }
}
