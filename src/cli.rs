//! CLI argument parsing for the outline status tool.
//!
//! The CLI is intentionally thin: every subcommand loads an outline file,
//! calls pure report builders, and renders the result, so the same core
//! logic can be reused elsewhere.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for outline reporting.
#[derive(Parser, Debug)]
#[command(
    name = "ostat",
    version,
    about = "Status classification and reports for course outlines",
    after_help = "Commands:\n  status --outline <file>             Classify every node and list status rows\n  outline --outline <file> --depth N  Emit the tree down to N child levels\n  graded --outline <file>             List graded content and its units\n  policy --outline <file>             List the course grading policy\n\nExamples:\n  ostat status --outline course.json\n  ostat status --outline course.json --json\n  ostat outline --outline course.json --depth 2 --json\n  ostat graded --outline course.json\n  ostat policy --outline course.json --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level report commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Status(StatusArgs),
    Outline(OutlineArgs),
    Graded(GradedArgs),
    Policy(PolicyArgs),
}

/// Status command inputs for a single outline file.
#[derive(Parser, Debug)]
#[command(about = "Classify every outline node and summarize warnings")]
pub struct StatusArgs {
    /// Outline projection JSON exported from the content service
    #[arg(long, value_name = "FILE")]
    pub outline: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Emit a verbose transcript on stderr
    #[arg(long)]
    pub verbose: bool,
}

/// Outline command inputs for depth-limited serialization.
#[derive(Parser, Debug)]
#[command(about = "Serialize the outline tree down to a depth limit")]
pub struct OutlineArgs {
    /// Outline projection JSON exported from the content service
    #[arg(long, value_name = "FILE")]
    pub outline: PathBuf,

    /// Child levels below the root to include
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub depth: u32,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Emit a verbose transcript on stderr
    #[arg(long)]
    pub verbose: bool,
}

/// Policy command inputs listing the grading policy.
#[derive(Parser, Debug)]
#[command(about = "List the course grading policy")]
pub struct PolicyArgs {
    /// Outline projection JSON exported from the content service
    #[arg(long, value_name = "FILE")]
    pub outline: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Emit a verbose transcript on stderr
    #[arg(long)]
    pub verbose: bool,
}

/// Graded command inputs listing graded content.
#[derive(Parser, Debug)]
#[command(about = "List graded content with the units beneath it")]
pub struct GradedArgs {
    /// Outline projection JSON exported from the content service
    #[arg(long, value_name = "FILE")]
    pub outline: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Emit a verbose transcript on stderr
    #[arg(long)]
    pub verbose: bool,
}
