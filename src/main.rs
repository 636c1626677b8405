use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod classify;
mod cli;
mod labels;
mod node;
mod report;

use cli::{Command, GradedArgs, OutlineArgs, PolicyArgs, RootArgs, StatusArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    match args.command {
        Command::Status(args) => run_status(args),
        Command::Outline(args) => run_outline(args),
        Command::Graded(args) => run_graded(args),
        Command::Policy(args) => run_policy(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "ostat=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_status(args: StatusArgs) -> Result<()> {
    init_tracing(args.verbose);
    let root = node::load_outline(&args.outline)?;
    let report = report::build_status_report(&root);
    if args.json {
        print_json(&report)?;
    } else {
        print!("{}", report::render_status_text(&report));
    }
    Ok(())
}

fn run_outline(args: OutlineArgs) -> Result<()> {
    init_tracing(args.verbose);
    let root = node::load_outline(&args.outline)?;
    let doc = report::build_outline(&root, args.depth);
    if args.json {
        print_json(&doc)?;
    } else {
        print!("{}", report::render_outline_text(&doc));
    }
    Ok(())
}

fn run_graded(args: GradedArgs) -> Result<()> {
    init_tracing(args.verbose);
    let root = node::load_outline(&args.outline)?;
    let doc = report::build_graded(&root);
    if args.json {
        print_json(&doc)?;
    } else {
        print!("{}", report::render_graded_text(&doc));
    }
    Ok(())
}

fn run_policy(args: PolicyArgs) -> Result<()> {
    init_tracing(args.verbose);
    let root = node::load_outline(&args.outline)?;
    let doc = report::build_policy(&root);
    // An outline without graders has no policy to report.
    anyhow::ensure!(
        !doc.entries.is_empty(),
        "no grading policy in outline {}",
        args.outline.display()
    );
    if args.json {
        print_json(&doc)?;
    } else {
        print!("{}", report::render_policy_text(&doc));
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
