// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::{InputFormat, OutputFormat};

/// Command-line arguments for `tasktree`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasktree",
    version,
    about = "Flatten a tree of prioritised tasks into a single execution order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task hierarchy (JSON or TOML).
    ///
    /// Omit or pass `-` to read from stdin.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Input format. `auto` decides by file extension.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,

    /// How to print the resulting order.
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub output: OutputFormat,

    /// Validate the input and print a summary, without printing the order.
    #[arg(long)]
    pub check: bool,

    /// Run the built-in demonstration cases and exit.
    #[arg(long, conflicts_with_all = ["input", "check"])]
    pub demo: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKTREE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// The input path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&str> {
        match self.input.as_deref() {
            None | Some("-") => None,
            Some(path) => Some(path),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
