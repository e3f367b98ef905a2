// src/hierarchy/validate.rs

use serde_json::{Map, Number, Value};

use crate::errors::{Result, TaskTreeError};
use crate::hierarchy::model::{Priority, RawHierarchy, TaskHierarchy, TaskNode};

impl TryFrom<RawHierarchy> for TaskHierarchy {
    type Error = TaskTreeError;

    fn try_from(raw: RawHierarchy) -> std::result::Result<Self, Self::Error> {
        validate_hierarchy(&raw.0)
    }
}

/// Check an untyped hierarchy and convert it into typed nodes.
///
/// The outer shape is checked first: the value must be a list and every
/// element a record. Each tree is then validated in the order it would be
/// scheduled (descending priority, stable), so with several bad trees the
/// one that would run first is reported. A priority that is not a number
/// sorts as `0` here and fails when its own tree is validated.
///
/// The first violation aborts the whole conversion. On success the trees are
/// returned in input order.
pub fn validate_hierarchy(value: &Value) -> Result<TaskHierarchy> {
    let elements = value
        .as_array()
        .ok_or(TaskTreeError::HierarchyNotASequence {
            found: kind_of(value),
        })?;

    if let Some((index, bad)) = elements.iter().enumerate().find(|(_, v)| !v.is_object()) {
        return Err(TaskTreeError::TopLevelElementInvalid {
            index,
            found: kind_of(bad),
        });
    }

    let mut visit_order: Vec<usize> = (0..elements.len()).collect();
    visit_order.sort_by_key(|&i| std::cmp::Reverse(sort_priority(&elements[i])));

    let mut slots: Vec<Option<TaskNode>> = vec![None; elements.len()];
    for index in visit_order {
        slots[index] = Some(validate_task(&elements[index], &format!("[{index}]"))?);
    }

    Ok(TaskHierarchy::new(slots.into_iter().flatten().collect()))
}

/// Validate a single task record and, depth-first, all of its subtasks.
///
/// `path` locates the node in error messages, e.g. `[0].subtasks[2]`.
///
/// `priority` must be a JSON number. `true`/`false` are rejected with
/// [`TaskTreeError::InvalidPriorityType`], unlike dynamic languages where a
/// boolean is also an integer.
pub fn validate_task(value: &Value, path: &str) -> Result<TaskNode> {
    let record = value.as_object().ok_or_else(|| TaskTreeError::NotARecord {
        path: path.to_string(),
        found: kind_of(value),
    })?;

    let name = match record.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => {
            return Err(TaskTreeError::MissingOrInvalidName {
                path: path.to_string(),
            });
        }
    };

    let priority = validate_priority(record, path)?;

    let subtasks = match record.get("subtasks") {
        None => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| validate_task(item, &format!("{path}.subtasks[{i}]")))
                .collect::<Result<Vec<_>>>()?,
        ),
        Some(other) => {
            return Err(TaskTreeError::SubtasksNotASequence {
                path: path.to_string(),
                found: kind_of(other),
            });
        }
    };

    Ok(TaskNode {
        name,
        priority,
        subtasks,
    })
}

/// Only JSON numbers are priorities. Booleans are rejected even though some
/// dynamic languages would treat `true` as `1`.
fn validate_priority(record: &Map<String, Value>, path: &str) -> Result<Option<Priority>> {
    match record.get("priority") {
        None => Ok(None),
        Some(Value::Number(n)) => number_priority(n).map(Some).ok_or_else(|| {
            TaskTreeError::InvalidPriorityType {
                path: path.to_string(),
                found: "an unrepresentable number",
            }
        }),
        Some(other) => Err(TaskTreeError::InvalidPriorityType {
            path: path.to_string(),
            found: kind_of(other),
        }),
    }
}

fn number_priority(n: &Number) -> Option<Priority> {
    match n.as_i64() {
        Some(i) => Some(Priority::Int(i)),
        None => n.as_f64().map(Priority::Float),
    }
}

/// Priority used to order top-level validation; anything but a number is `0`.
fn sort_priority(task: &Value) -> Priority {
    match task.get("priority") {
        Some(Value::Number(n)) => number_priority(n).unwrap_or(Priority::ZERO),
        _ => Priority::ZERO,
    }
}

/// Human-readable name of a JSON value's type, for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a record",
    }
}
