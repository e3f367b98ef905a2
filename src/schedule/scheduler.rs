// src/schedule/scheduler.rs

use serde_json::Value;

use crate::errors::Result;
use crate::hierarchy::model::{TaskHierarchy, TaskNode};
use crate::hierarchy::validate::validate_hierarchy;
use crate::schedule::order::by_priority_desc;

/// Validate untyped input, then schedule it.
///
/// Either every node is valid and the full order is returned, or the first
/// violation is returned and nothing else.
pub fn schedule_value(value: &Value) -> Result<Vec<String>> {
    let hierarchy = validate_hierarchy(value)?;
    Ok(schedule(&hierarchy))
}

/// Flatten a validated forest.
///
/// Top-level tasks run in descending priority order; each contributes its
/// whole subtree before the next one starts.
pub fn schedule(hierarchy: &TaskHierarchy) -> Vec<String> {
    let mut order = Vec::with_capacity(hierarchy.node_count());
    for task in by_priority_desc(&hierarchy.tasks) {
        append_subtree(task, &mut order);
    }
    order
}

/// Flatten one task's subtree: every subtask (highest priority first, each
/// fully expanded) and then the task itself.
pub fn schedule_node(task: &TaskNode) -> Vec<String> {
    let mut order = Vec::with_capacity(task.node_count());
    append_subtree(task, &mut order);
    order
}

fn append_subtree(task: &TaskNode, order: &mut Vec<String>) {
    for subtask in by_priority_desc(task.children()) {
        append_subtree(subtask, order);
    }
    order.push(task.name.clone());
}
