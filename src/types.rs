use std::path::Path;

use clap::ValueEnum;

/// Format of the task hierarchy on disk / stdin.
///
/// - `Json`: the document itself is the list of top-level tasks.
/// - `Toml`: the tasks are the `[[task]]` array of tables.
/// - `Auto`: pick by file extension, falling back to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    #[default]
    Auto,
    Json,
    Toml,
}

impl InputFormat {
    /// Resolve `Auto` against a path. Explicit formats are returned as-is.
    pub fn resolve(self, path: Option<&Path>) -> InputFormat {
        match self {
            InputFormat::Auto => match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
                _ => InputFormat::Json,
            },
            other => other,
        }
    }
}

/// How the schedule is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One task name per line.
    #[default]
    Lines,
    /// A single JSON array of names.
    Json,
}
