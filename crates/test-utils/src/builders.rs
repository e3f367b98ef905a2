use serde_json::{Map, Value, json};
use tasktree::hierarchy::{Priority, TaskHierarchy, TaskNode};

/// Builder for a top-level task list, producing either typed or raw input.
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    tasks: Vec<TaskNodeBuilder>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, task: TaskNodeBuilder) -> Self {
        self.tasks.push(task);
        self
    }

    /// Typed hierarchy, bypassing validation.
    pub fn build(self) -> TaskHierarchy {
        TaskHierarchy::new(self.tasks.into_iter().map(TaskNodeBuilder::build).collect())
    }

    /// Untyped JSON as a caller would hand it over.
    pub fn to_value(&self) -> Value {
        Value::Array(self.tasks.iter().map(TaskNodeBuilder::to_value).collect())
    }
}

/// Builder for one `TaskNode`.
#[derive(Debug, Clone)]
pub struct TaskNodeBuilder {
    name: String,
    priority: Option<Priority>,
    subtasks: Option<Vec<TaskNodeBuilder>>,
    extra: Map<String, Value>,
}

impl TaskNodeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            priority: None,
            subtasks: None,
            extra: Map::new(),
        }
    }

    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn subtask(mut self, task: TaskNodeBuilder) -> Self {
        self.subtasks.get_or_insert_with(Vec::new).push(task);
        self
    }

    /// Present but empty `subtasks` list.
    pub fn empty_subtasks(mut self) -> Self {
        self.subtasks.get_or_insert_with(Vec::new);
        self
    }

    /// Extra field the scheduler is expected to ignore (e.g. `id`).
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> TaskNode {
        TaskNode {
            name: self.name,
            priority: self.priority,
            subtasks: self
                .subtasks
                .map(|subs| subs.into_iter().map(TaskNodeBuilder::build).collect()),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut record = self.extra.clone();
        record.insert("name".to_string(), json!(self.name));
        if let Some(p) = self.priority {
            record.insert("priority".to_string(), json!(p));
        }
        if let Some(ref subs) = self.subtasks {
            record.insert(
                "subtasks".to_string(),
                Value::Array(subs.iter().map(TaskNodeBuilder::to_value).collect()),
            );
        }
        Value::Object(record)
    }
}
