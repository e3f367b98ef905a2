// src/lib.rs

pub mod cli;
pub mod demo;
pub mod errors;
pub mod hierarchy;
pub mod logging;
pub mod schedule;
pub mod types;

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::hierarchy::{RawHierarchy, TaskHierarchy, load_from_path, load_from_reader};
use crate::types::OutputFormat;

/// High-level entry point used by `main.rs`.
///
/// Reads stdin when no input path is given and prints to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(args, stdin.lock(), &mut stdout.lock())
}

/// [`run`] with explicit streams.
///
/// This wires together:
/// - input loading (file, or `stdin` for no path / `-`)
/// - validation
/// - scheduling
/// - printing the order (or a summary for `--check`)
pub fn run_with(args: CliArgs, stdin: impl Read, out: &mut impl Write) -> Result<()> {
    if args.demo {
        demo::run_demo(out).context("writing demo output")?;
        return Ok(());
    }

    let raw = read_input(&args, stdin)?;
    let hierarchy = TaskHierarchy::try_from(raw)?;
    info!(
        top_level = hierarchy.len(),
        nodes = hierarchy.node_count(),
        "task hierarchy validated"
    );

    if args.check {
        print_check(out, &hierarchy)?;
        return Ok(());
    }

    let order = schedule::schedule(&hierarchy);
    debug!(scheduled = order.len(), "schedule computed");

    print_order(out, &order, args.output)?;
    Ok(())
}

fn read_input(args: &CliArgs, stdin: impl Read) -> Result<RawHierarchy> {
    match args.input_path() {
        Some(path) => load_from_path(path, args.format)
            .with_context(|| format!("loading task hierarchy from {path:?}")),
        None => {
            debug!("reading task hierarchy from stdin");
            load_from_reader(stdin, args.format).context("loading task hierarchy from stdin")
        }
    }
}

/// Write the order in the requested format.
pub fn print_order(out: &mut impl Write, order: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for name in order {
                writeln!(out, "{name}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, order)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Short validation summary for `--check`.
pub fn print_check(out: &mut impl Write, hierarchy: &TaskHierarchy) -> Result<()> {
    writeln!(out, "tasktree check")?;
    writeln!(out, "  top-level tasks: {}", hierarchy.len())?;
    writeln!(out, "  total tasks: {}", hierarchy.node_count())?;
    for task in hierarchy {
        match task.priority {
            Some(p) => writeln!(out, "  - {} (priority {p})", task.name)?,
            None => writeln!(out, "  - {}", task.name)?,
        }
        if !task.children().is_empty() {
            writeln!(out, "      subtasks: {}", task.node_count() - 1)?;
        }
    }
    Ok(())
}
