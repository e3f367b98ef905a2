// src/hierarchy/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::errors::{Result, TaskTreeError};
use crate::hierarchy::model::{RawHierarchy, TaskHierarchy};
use crate::types::InputFormat;

/// Key holding the task list in TOML input (`[[task]]` tables).
pub const TOML_TASKS_KEY: &str = "task";

/// Load a hierarchy file and return it untyped.
///
/// This only performs parsing; it does **not** check the task shape. Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>, format: InputFormat) -> Result<RawHierarchy> {
    let path = path.as_ref();
    let format = format.resolve(Some(path));
    debug!(path = %path.display(), ?format, "loading task hierarchy");

    let contents = fs::read_to_string(path)?;
    parse_str(&contents, format)
}

/// Same as [`load_from_path`] for an arbitrary reader (typically stdin).
///
/// `Auto` resolves to JSON since there is no extension to go by.
pub fn load_from_reader(mut reader: impl Read, format: InputFormat) -> Result<RawHierarchy> {
    let format = format.resolve(None);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_str(&contents, format)
}

/// Parse hierarchy text in the given format.
pub fn parse_str(contents: &str, format: InputFormat) -> Result<RawHierarchy> {
    match format.resolve(None) {
        InputFormat::Toml => parse_toml(contents),
        _ => Ok(RawHierarchy(serde_json::from_str(contents)?)),
    }
}

/// Load a hierarchy file and validate it.
///
/// This is the recommended entry point for callers holding a path:
///
/// - Parses JSON or TOML.
/// - Checks every node's `name`, `priority` and `subtasks`.
/// - Fails as a whole on the first violation.
pub fn load_and_validate(path: impl AsRef<Path>, format: InputFormat) -> Result<TaskHierarchy> {
    let raw = load_from_path(path, format)?;
    TaskHierarchy::try_from(raw)
}

/// A TOML document is always a table, so the task list lives under
/// [`TOML_TASKS_KEY`]. No such key means no tasks.
fn parse_toml(contents: &str) -> Result<RawHierarchy> {
    let mut doc: toml::Table = toml::from_str(contents)?;

    let tasks = match doc.remove(TOML_TASKS_KEY) {
        None => Value::Array(Vec::new()),
        Some(toml::Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| toml_task_to_json(item, &format!("[{i}]")))
                .collect::<Result<Vec<_>>>()?,
        ),
        Some(other) => toml_to_json(other),
    };

    Ok(RawHierarchy(tasks))
}

/// Convert a TOML value that sits where a task is expected.
///
/// JSON has no NaN or infinity, so a non-finite `priority` is rejected here
/// with the task's path. Non-finite floats anywhere else become `null`, which
/// only unknown fields can hold.
fn toml_task_to_json(value: toml::Value, path: &str) -> Result<Value> {
    let toml::Value::Table(table) = value else {
        return Ok(toml_to_json(value));
    };

    let mut record = Map::new();
    for (key, field) in table {
        let converted = match (key.as_str(), field) {
            ("priority", toml::Value::Float(f)) if !f.is_finite() => {
                return Err(TaskTreeError::InvalidPriorityType {
                    path: path.to_string(),
                    found: "a non-finite float",
                });
            }
            ("subtasks", toml::Value::Array(items)) => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| toml_task_to_json(item, &format!("{path}.subtasks[{i}]")))
                    .collect::<Result<Vec<_>>>()?,
            ),
            (_, other) => toml_to_json(other),
        };
        record.insert(key, converted);
    }
    Ok(Value::Object(record))
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        // Kept as a record so a datetime never passes for a task name.
        toml::Value::Datetime(dt) => {
            let mut record = Map::new();
            record.insert("datetime".to_string(), Value::String(dt.to_string()));
            Value::Object(record)
        }
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
