//! Status classification for outline items.
//!
//! This module computes a deterministic display status from a node's
//! attributes. It is the decision half of the Studio outline view: the
//! rendering layer asks "what badge does this row get?" and consumes the
//! plain [`StatusResult`] without knowing the rules.
//!
//! # Decision order (first match wins)
//!
//! ```text
//! staff_only_message set        -> StaffOnly, that message, lock-icon
//! needs_attention on a vertical -> Warning, one of three messages, file-icon
//!   published && released       ->   "Unpublished changes to live content"
//!   !published                  ->   "Unpublished units will not be released"
//!   otherwise                   ->   "Unpublished changes to content that
//!                                     will release in the future"
//! anything else                 -> None, no message
//! ```
//!
//! Classification is total and pure: every well-formed node maps to a
//! result, identical inputs map to identical outputs, and nothing here
//! touches I/O or shared state.
use crate::node::{ContentNode, VisibilityState};
use serde::Serialize;

/// Standard message attached to staff-only rows by the report layer.
pub const STAFF_ONLY_MESSAGE: &str = "Contains staff only content";

pub const MSG_LIVE_CHANGES: &str = "Unpublished changes to live content";
pub const MSG_NEVER_RELEASED: &str = "Unpublished units will not be released";
pub const MSG_FUTURE_CHANGES: &str =
    "Unpublished changes to content that will release in the future";

/// Category of status badge shown on an outline row.
///
/// `Error` has an icon mapping but no producing rule; it is reserved for a
/// future validation pass and kept so serialized statuses stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusType {
    None,
    Warning,
    Error,
    StaffOnly,
}

impl StatusType {
    pub fn icon_class(self) -> &'static str {
        match self {
            StatusType::Warning => "file-icon",
            StatusType::Error => "warning-icon",
            StatusType::StaffOnly => "lock-icon",
            StatusType::None => "",
        }
    }
}

/// Classification outcome for one outline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    pub status_type: StatusType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    pub icon_class: &'static str,
}

impl StatusResult {
    fn new(status_type: StatusType, status_message: Option<String>) -> Self {
        StatusResult {
            status_type,
            status_message,
            icon_class: status_type.icon_class(),
        }
    }
}

/// Classify one node into its display status.
///
/// `staff_only_message` is caller-supplied so the report layer controls the
/// wording; when present it wins over every other rule.
pub fn classify(node: &ContentNode, staff_only_message: Option<&str>) -> StatusResult {
    if let Some(message) = staff_only_message {
        return StatusResult::new(StatusType::StaffOnly, Some(message.to_string()));
    }

    // Warnings only surface on vertical leaves; a structural node with
    // needs_attention delegates the badge to the units beneath it.
    if node.visibility_state == VisibilityState::NeedsAttention && node.is_leaf() {
        let published = node.published_state.is_published();
        let message = if published && node.released_to_students {
            MSG_LIVE_CHANGES
        } else if !published {
            MSG_NEVER_RELEASED
        } else {
            MSG_FUTURE_CHANGES
        };
        return StatusResult::new(StatusType::Warning, Some(message.to_string()));
    }

    StatusResult::new(StatusType::None, None)
}
