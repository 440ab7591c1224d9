//! Translation between the lead pipeline vocabulary and the work board's
//! lane vocabulary, plus lead linkage embedded in card descriptions.
//!
//! The mapping table is the only place the two vocabularies meet; adapters
//! never hardcode lane names outside the constants below.

use crate::domain::work_item::WorkItemStatus;
use regex::Regex;
use std::sync::OnceLock;

/// Lane holding freshly created work items.
pub const TODO_LANE: &str = "TODO";
/// Lane for items being worked.
pub const IN_PROGRESS_LANE: &str = "IN_PROGRESS";
/// Lane for completed items.
pub const DONE_LANE: &str = "DONE";
/// Lane for abandoned items.
pub const LOST_LANE: &str = "LOST";

/// Marker token that prefixes the lead identifier in a card description.
pub const LEAD_MARKER: &str = "Lead ID:";

/// Maps a lead status token to its lane on the work board.
///
/// Tokens outside the pipeline vocabulary (including the empty string)
/// return `None`, signaling "no movement required".
pub fn lane_for_status(status: &str) -> Option<&'static str> {
    match status {
        "NEW" => Some(TODO_LANE),
        "CONTACTED" => Some(IN_PROGRESS_LANE),
        "QUALIFIED" => Some(DONE_LANE),
        "LOST" => Some(LOST_LANE),
        _ => None,
    }
}

/// Maps a lane name back to a lead pipeline status.
///
/// Unmapped lanes yield [`WorkItemStatus::Unknown`]; callers must treat
/// that as non-authoritative and leave lead state alone.
pub fn status_for_lane(lane: &str) -> WorkItemStatus {
    match lane {
        TODO_LANE => WorkItemStatus::New,
        IN_PROGRESS_LANE => WorkItemStatus::Contacted,
        DONE_LANE => WorkItemStatus::Qualified,
        LOST_LANE => WorkItemStatus::Lost,
        _ => WorkItemStatus::Unknown,
    }
}

fn lead_marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Lead ID:\s*([A-Za-z0-9_-]+)").expect("lead marker pattern is valid")
    })
}

/// Extracts the linked lead identifier from a card description.
///
/// The marker may sit anywhere in the text; the first occurrence wins.
/// Empty or markerless text yields `None` ("no correlation"), never an
/// error.
pub fn extract_lead_id(description: &str) -> Option<String> {
    if description.is_empty() {
        return None;
    }
    lead_marker_pattern()
        .captures(description)
        .map(|caps| caps[1].to_string())
}

/// Builds a card description with the lead marker as the first line,
/// followed by the caller-supplied text, trimmed of surrounding whitespace.
pub fn build_description(lead_id: &str, free_text: &str) -> String {
    format!("{LEAD_MARKER} {lead_id}\n{free_text}")
        .trim()
        .to_string()
}
