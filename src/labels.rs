//! Grading and release labels for outline rows.
use crate::node::ContentNode;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Grading label shown next to a row.
///
/// Ungraded nodes always read "Not Graded", whatever their format field
/// says; graded nodes without a format fall back to the generic label.
pub fn grading_label(node: &ContentNode) -> String {
    if !node.graded {
        return "Not Graded".to_string();
    }
    node.grading_format
        .clone()
        .unwrap_or_else(|| "Graded".to_string())
}

/// Release standing of a structural node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ReleaseStatus {
    Released,
    Scheduled { release_date: DateTime<Utc> },
    Unscheduled,
}

impl ReleaseStatus {
    /// Derive the release standing; meaningful for non-leaf nodes only.
    pub fn of(node: &ContentNode) -> ReleaseStatus {
        if node.released_to_students {
            ReleaseStatus::Released
        } else if let Some(release_date) = node.release_date {
            ReleaseStatus::Scheduled { release_date }
        } else {
            ReleaseStatus::Unscheduled
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReleaseStatus::Released => "Released",
            ReleaseStatus::Scheduled { .. } => "Scheduled",
            ReleaseStatus::Unscheduled => "Unscheduled",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ReleaseStatus::Released => "check-icon",
            ReleaseStatus::Scheduled { .. } | ReleaseStatus::Unscheduled => "clock-icon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeType, PublishedState, VisibilityState};
    use chrono::TimeZone;

    fn section() -> ContentNode {
        ContentNode {
            id: "block-v1:section".to_string(),
            node_type: NodeType::Chapter,
            display_name: "Section".to_string(),
            published_state: PublishedState::PublishedClean,
            released_to_students: false,
            release_date: None,
            due_date: None,
            graded: false,
            grading_format: None,
            visibility_state: VisibilityState::Visible,
            grading_policy: Vec::new(),
            children: Vec::new(),
        }
    }

    #[test]
    fn ungraded_label_ignores_format() {
        let mut node = section();
        node.grading_format = Some("Homework".to_string());
        assert_eq!(grading_label(&node), "Not Graded");
    }

    #[test]
    fn graded_label_uses_format() {
        let mut node = section();
        node.graded = true;
        node.grading_format = Some("Midterm Exam".to_string());
        assert_eq!(grading_label(&node), "Midterm Exam");

        node.grading_format = None;
        assert_eq!(grading_label(&node), "Graded");
    }

    #[test]
    fn released_wins_regardless_of_release_date() {
        let mut node = section();
        node.released_to_students = true;
        node.release_date = Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());

        let status = ReleaseStatus::of(&node);
        assert_eq!(status, ReleaseStatus::Released);
        assert_eq!(status.label(), "Released");
        assert_eq!(status.icon_class(), "check-icon");
    }

    #[test]
    fn release_date_without_release_means_scheduled() {
        let mut node = section();
        let date = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        node.release_date = Some(date);

        let status = ReleaseStatus::of(&node);
        assert_eq!(status, ReleaseStatus::Scheduled { release_date: date });
        assert_eq!(status.icon_class(), "clock-icon");
    }

    #[test]
    fn no_release_info_means_unscheduled() {
        let status = ReleaseStatus::of(&section());
        assert_eq!(status, ReleaseStatus::Unscheduled);
        assert_eq!(status.label(), "Unscheduled");
        assert_eq!(status.icon_class(), "clock-icon");
    }
}
