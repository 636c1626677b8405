//! Course outline projections loaded from JSON.
//!
//! A [`ContentNode`] is a read-only view of one structural element of a
//! course (course, chapter, sequential, vertical) plus its children. Nodes
//! are built per invocation from an outline file and never mutated; all
//! downstream logic treats the tree as immutable input.
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Structural tier of an outline node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Course,
    Chapter,
    Sequential,
    Vertical,
    #[serde(untagged)]
    Other(String),
}

impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Course => "course",
            NodeType::Chapter => "chapter",
            NodeType::Sequential => "sequential",
            NodeType::Vertical => "vertical",
            NodeType::Other(label) => label,
        }
    }
}

/// Publish state of a node's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishedState {
    Unpublished,
    PublishedWithChanges,
    PublishedClean,
}

impl PublishedState {
    /// Whether any version of the content has been published.
    pub fn is_published(self) -> bool {
        !matches!(self, PublishedState::Unpublished)
    }
}

/// Visibility state reported by the content service.
///
/// `NeedsAttention` means unpublished or inconsistent content at or beneath
/// the node; only vertical leaves surface it as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityState {
    Visible,
    NeedsAttention,
    StaffOnly,
}

/// One assignment bucket of the course grading policy.
///
/// Field names follow the raw grader configuration as exported by the
/// content service; only meaningful on the course root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraderPolicy {
    #[serde(rename = "type")]
    pub assignment_type: String,
    pub min_count: u32,
    #[serde(default)]
    pub drop_count: u32,
    pub weight: f64,
}

/// One node of the course outline tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub display_name: String,
    pub published_state: PublishedState,
    #[serde(default)]
    pub released_to_students: bool,
    #[serde(default)]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub graded: bool,
    #[serde(default)]
    pub grading_format: Option<String>,
    pub visibility_state: VisibilityState,
    /// Raw grading policy; populated on the course root only.
    #[serde(default)]
    pub grading_policy: Vec<GraderPolicy>,
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Vertical nodes are the leaf tier of the outline.
    pub fn is_leaf(&self) -> bool {
        self.node_type == NodeType::Vertical
    }

    /// Preorder traversal over the node and everything beneath it.
    pub fn walk(&self) -> impl Iterator<Item = &ContentNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// Load an outline projection from a JSON file.
pub fn load_outline(path: &Path) -> Result<ContentNode> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read outline file {}", path.display()))?;
    let root: ContentNode = serde_json::from_str(&raw)
        .with_context(|| format!("parse outline file {}", path.display()))?;
    tracing::debug!(root = %root.id, "loaded outline");
    Ok(root)
}
