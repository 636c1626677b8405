//! Shared test infrastructure for integration tests.

use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Writes an outline JSON into a temp dir and runs the ostat binary on it.
pub struct OutlineFixture {
    _dir: TempDir,
    pub outline_path: PathBuf,
}

/// Status summary parsed from `ostat status --json`.
#[derive(Debug, Deserialize)]
pub struct StatusJson {
    pub schema_version: u32,
    pub root_id: String,
    pub node_count: usize,
    pub warning_count: usize,
    pub staff_only_count: usize,
    pub rows: Vec<RowJson>,
}

#[derive(Debug, Deserialize)]
pub struct RowJson {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub depth: usize,
    pub status_type: String,
    #[serde(default)]
    pub status_message: Option<String>,
    pub icon_class: String,
    pub grading: String,
}

impl OutlineFixture {
    pub fn write(outline_json: &str) -> OutlineFixture {
        let dir = TempDir::new().expect("create temp dir");
        let outline_path = dir.path().join("course.json");
        std::fs::write(&outline_path, outline_json).expect("write outline fixture");
        OutlineFixture {
            _dir: dir,
            outline_path,
        }
    }

    /// Run the built ostat binary with the given subcommand and extra args.
    pub fn run(&self, subcommand: &str, extra: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_ostat"))
            .arg(subcommand)
            .arg("--outline")
            .arg(&self.outline_path)
            .args(extra)
            .output()
            .expect("run ostat")
    }

    pub fn status_json(&self) -> StatusJson {
        let output = self.run("status", &["--json"]);
        assert!(
            output.status.success(),
            "ostat status failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("parse status JSON")
    }
}
