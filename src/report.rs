//! Report documents built from an outline tree.
//!
//! Everything here is the consuming side of [`crate::classify`]: rows and
//! documents are plain serializable data so callers can render text, JSON,
//! or markup without re-deriving any decision. Documents carry a schema
//! version so downstream tooling can detect format changes.
use crate::classify::{self, StatusResult};
use crate::labels::{grading_label, ReleaseStatus};
use crate::node::{ContentNode, VisibilityState};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

pub const STATUS_SCHEMA_VERSION: u32 = 1;
pub const OUTLINE_SCHEMA_VERSION: u32 = 1;
pub const GRADED_SCHEMA_VERSION: u32 = 1;
pub const POLICY_SCHEMA_VERSION: u32 = 1;

/// Release columns of a status row, flattened for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseEntry {
    pub label: &'static str,
    pub icon_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
}

impl From<ReleaseStatus> for ReleaseEntry {
    fn from(status: ReleaseStatus) -> Self {
        let label = status.label();
        let icon_class = status.icon_class();
        let release_date = match status {
            ReleaseStatus::Scheduled { release_date } => Some(release_date),
            ReleaseStatus::Released | ReleaseStatus::Unscheduled => None,
        };
        ReleaseEntry {
            label,
            icon_class,
            release_date,
        }
    }
}

/// One outline row with everything the view needs.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRow {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub display_name: String,
    pub depth: usize,
    #[serde(flatten)]
    pub status: StatusResult,
    pub grading: String,
    /// Present on structural nodes only; leaves have no release column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<ReleaseEntry>,
}

/// Full status report over an outline, rows in document order.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub schema_version: u32,
    pub root_id: String,
    pub node_count: usize,
    pub warning_count: usize,
    pub staff_only_count: usize,
    pub rows: Vec<StatusRow>,
}

/// Classify every node of the outline into a report.
pub fn build_status_report(root: &ContentNode) -> StatusReport {
    let mut rows = Vec::new();
    collect_rows(root, 0, &mut rows);

    let warning_count = rows
        .iter()
        .filter(|row| row.status.status_type == classify::StatusType::Warning)
        .count();
    let staff_only_count = rows
        .iter()
        .filter(|row| row.status.status_type == classify::StatusType::StaffOnly)
        .count();
    tracing::info!(
        nodes = rows.len(),
        warnings = warning_count,
        "built status report"
    );

    StatusReport {
        schema_version: STATUS_SCHEMA_VERSION,
        root_id: root.id.clone(),
        node_count: rows.len(),
        warning_count,
        staff_only_count,
        rows,
    }
}

fn collect_rows(node: &ContentNode, depth: usize, rows: &mut Vec<StatusRow>) {
    // The staff-only wording belongs to this layer, not the classifier.
    let staff_only_message = (node.visibility_state == VisibilityState::StaffOnly)
        .then_some(classify::STAFF_ONLY_MESSAGE);
    let status = classify::classify(node, staff_only_message);
    let release = (!node.is_leaf()).then(|| ReleaseEntry::from(ReleaseStatus::of(node)));

    rows.push(StatusRow {
        id: node.id.clone(),
        node_type: node.node_type.as_str().to_string(),
        display_name: node.display_name.clone(),
        depth,
        status,
        grading: grading_label(node),
        release,
    });
    for child in &node.children {
        collect_rows(child, depth + 1, rows);
    }
}

/// Render a status report as an indented text listing.
pub fn render_status_text(report: &StatusReport) -> String {
    let mut out = String::new();
    for row in &report.rows {
        let indent = "  ".repeat(row.depth);
        let _ = write!(out, "{indent}{} {}", row.node_type, row.display_name);
        if let Some(release) = &row.release {
            match release.release_date {
                Some(date) => {
                    let _ = write!(out, " [{} {}]", release.label, date.format("%Y-%m-%d"));
                }
                None => {
                    let _ = write!(out, " [{}]", release.label);
                }
            }
        }
        if row.grading != "Not Graded" {
            let _ = write!(out, " ({})", row.grading);
        }
        if let Some(message) = &row.status.status_message {
            let _ = write!(out, " !! {message}");
        }
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "nodes={} warnings={} staff_only={}",
        report.node_count, report.warning_count, report.staff_only_count
    );
    out
}

/// Depth-limited outline serialization.
///
/// Children are included down to `depth` levels below the root; at the
/// cutoff the `children` key is omitted entirely rather than emitted empty,
/// so consumers can tell "no children serialized" from "no children".
#[derive(Debug, Serialize)]
pub struct OutlineEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<OutlineEntry>>,
}

#[derive(Debug, Serialize)]
pub struct OutlineDoc {
    pub schema_version: u32,
    pub root: OutlineEntry,
}

pub fn build_outline(root: &ContentNode, depth: u32) -> OutlineDoc {
    OutlineDoc {
        schema_version: OUTLINE_SCHEMA_VERSION,
        root: outline_entry(root, depth),
    }
}

fn outline_entry(node: &ContentNode, depth: u32) -> OutlineEntry {
    let children = (depth > 0).then(|| {
        node.children
            .iter()
            .map(|child| outline_entry(child, depth - 1))
            .collect()
    });
    OutlineEntry {
        id: node.id.clone(),
        node_type: node.node_type.as_str().to_string(),
        display_name: node.display_name.clone(),
        release_date: node.release_date,
        due_date: node.due_date,
        children,
    }
}

/// Render a depth-limited outline as an indented text listing.
pub fn render_outline_text(doc: &OutlineDoc) -> String {
    let mut out = String::new();
    render_outline_entry(&doc.root, 0, &mut out);
    out
}

fn render_outline_entry(entry: &OutlineEntry, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{indent}{} {}", entry.node_type, entry.display_name);
    if let Some(children) = &entry.children {
        for child in children {
            render_outline_entry(child, depth + 1, out);
        }
    }
}

/// A graded item with the units beneath it.
#[derive(Debug, Serialize)]
pub struct GradedItem {
    pub id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub units: Vec<UnitRef>,
}

#[derive(Debug, Serialize)]
pub struct UnitRef {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct GradedDoc {
    pub schema_version: u32,
    pub items: Vec<GradedItem>,
}

/// Collect graded content across the outline, sorted by id.
pub fn build_graded(root: &ContentNode) -> GradedDoc {
    let mut items: Vec<GradedItem> = root
        .walk()
        .filter(|node| node.graded)
        .map(|node| GradedItem {
            id: node.id.clone(),
            display_name: node.display_name.clone(),
            format: node.grading_format.clone(),
            units: graded_units(node),
        })
        .collect();
    items.sort_by(|a, b| a.id.cmp(&b.id));
    GradedDoc {
        schema_version: GRADED_SCHEMA_VERSION,
        items,
    }
}

fn graded_units(node: &ContentNode) -> Vec<UnitRef> {
    if node.is_leaf() {
        return vec![UnitRef {
            id: node.id.clone(),
            display_name: node.display_name.clone(),
        }];
    }
    node.walk()
        .filter(|descendant| descendant.is_leaf())
        .map(|unit| UnitRef {
            id: unit.id.clone(),
            display_name: unit.display_name.clone(),
        })
        .collect()
}

/// One assignment type of the course grading policy, in report shape.
///
/// The raw grader fields are renamed for consumers: `min_count` becomes
/// `count` and `drop_count` becomes `dropped`.
#[derive(Debug, Serialize)]
pub struct PolicyEntry {
    pub assignment_type: String,
    pub count: u32,
    pub dropped: u32,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct PolicyDoc {
    pub schema_version: u32,
    pub entries: Vec<PolicyEntry>,
}

/// Project the course grading policy into a report document.
///
/// Entries keep the policy's own order; an outline without a policy yields
/// an empty document, which the CLI treats as an error.
pub fn build_policy(root: &ContentNode) -> PolicyDoc {
    let entries = root
        .grading_policy
        .iter()
        .map(|grader| PolicyEntry {
            assignment_type: grader.assignment_type.clone(),
            count: grader.min_count,
            dropped: grader.drop_count,
            weight: grader.weight,
        })
        .collect();
    PolicyDoc {
        schema_version: POLICY_SCHEMA_VERSION,
        entries,
    }
}

/// Render the grading policy as a text listing.
pub fn render_policy_text(doc: &PolicyDoc) -> String {
    let mut out = String::new();
    for entry in &doc.entries {
        let _ = writeln!(
            out,
            "{}: count={} dropped={} weight={}",
            entry.assignment_type, entry.count, entry.dropped, entry.weight
        );
    }
    out
}

/// Render graded content as a text listing.
pub fn render_graded_text(doc: &GradedDoc) -> String {
    let mut out = String::new();
    for item in &doc.items {
        let format = item.format.as_deref().unwrap_or("Graded");
        let _ = writeln!(out, "{} {} ({format})", item.id, item.display_name);
        for unit in &item.units {
            let _ = writeln!(out, "  {} {}", unit.id, unit.display_name);
        }
    }
    out
}
