// src/hierarchy/model.rs

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A task's ordering weight, as given in the input.
///
/// Integers are kept exact so large values never collapse into ties. Mixed
/// integer/float pairs compare as `f64`. Integers above `i64::MAX` arrive as
/// floats. Floats are ordered with `f64::total_cmp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    Int(i64),
    Float(f64),
}

impl Priority {
    pub const ZERO: Priority = Priority::Int(0);

    pub fn as_f64(self) -> f64 {
        match self {
            Priority::Int(i) => i as f64,
            Priority::Float(f) => f,
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Priority::Int(a), Priority::Int(b)) => a.cmp(&b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Priority::Int(value)
    }
}

impl From<f64> for Priority {
    fn from(value: f64) -> Self {
        Priority::Float(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Int(i) => write!(f, "{i}"),
            Priority::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A single task and its subtree.
///
/// Mirrors the input records:
///
/// ```json
/// {"id": 1, "name": "Task A", "priority": 2, "subtasks": [{"name": "Task B"}]}
/// ```
///
/// Fields other than `name`, `priority` and `subtasks` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    pub name: String,

    /// Ordering weight among siblings; higher runs first.
    ///
    /// `None` when the field was absent. Use [`TaskNode::effective_priority`]
    /// for ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Child tasks, all of which run before this one.
    ///
    /// `None` when the field was absent, which orders the same as an empty
    /// list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<TaskNode>>,
}

impl TaskNode {
    /// A leaf task with no priority and no subtasks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: None,
            subtasks: None,
        }
    }

    /// Priority used for ordering: absent counts as `0`.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or(Priority::ZERO)
    }

    /// Subtasks in input order, empty when the field was absent.
    pub fn children(&self) -> &[TaskNode] {
        self.subtasks.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(TaskNode::node_count).sum::<usize>()
    }
}

/// A validated forest of top-level tasks.
///
/// Only obtainable from untyped input through `TryFrom<RawHierarchy>`, or by
/// building the typed nodes directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskHierarchy {
    pub tasks: Vec<TaskNode>,
}

impl TaskHierarchy {
    pub fn new(tasks: Vec<TaskNode>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskNode> {
        self.tasks.iter()
    }

    /// Total number of nodes across every tree in the forest.
    pub fn node_count(&self) -> usize {
        self.tasks.iter().map(TaskNode::node_count).sum()
    }
}

impl<'a> IntoIterator for &'a TaskHierarchy {
    type Item = &'a TaskNode;
    type IntoIter = std::slice::Iter<'a, TaskNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Untyped hierarchy exactly as it arrived, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHierarchy(pub serde_json::Value);

impl From<serde_json::Value> for RawHierarchy {
    fn from(value: serde_json::Value) -> Self {
        RawHierarchy(value)
    }
}
