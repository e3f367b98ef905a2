// src/demo.rs

//! Built-in demonstration cases, run by `tasktree --demo`.

use std::io::Write;

use serde_json::{Value, json};
use tracing::debug;

use crate::schedule::schedule_value;

/// The five reference cases, in display order.
pub fn demo_cases() -> Vec<(&'static str, Value)> {
    vec![
        (
            "Case 1: Basic Hierarchy",
            json!([
                {
                    "id": 1,
                    "name": "Task A",
                    "priority": 2,
                    "subtasks": [
                        {
                            "id": 2,
                            "name": "Task B",
                            "priority": 1,
                            "subtasks": [{"id": 4, "name": "Task D", "priority": 3}]
                        },
                        {"id": 3, "name": "Task C", "priority": 3}
                    ]
                },
                {"id": 5, "name": "Task E", "priority": 0}
            ]),
        ),
        ("Case 2: No Tasks", json!([])),
        (
            "Case 3: Single Task",
            json!([{"id": 1, "name": "Task X", "priority": 5}]),
        ),
        (
            "Case 4: Invalid Task Format",
            json!([{"id": 1, "name": "Task Invalid", "subtasks": "Not a list"}]),
        ),
        (
            "Case 5: Mixed Valid and Invalid Tasks",
            json!([
                {"id": 1, "name": "Task Y", "priority": 3},
                {
                    "id": 2,
                    "name": "Task Z",
                    "subtasks": [{"id": 3, "name": "Subtask Valid", "priority": 1}]
                },
                {"id": 4, "name": "Task Invalid", "subtasks": "Invalid subtasks"}
            ]),
        ),
    ]
}

/// Schedule every demo case and write either its order or its error.
///
/// A failing case is part of the demonstration, so only write errors are
/// returned.
pub fn run_demo(out: &mut impl Write) -> std::io::Result<()> {
    for (case_name, tasks) in demo_cases() {
        writeln!(out, "\n{case_name}:")?;
        match schedule_value(&tasks) {
            Ok(order) => {
                debug!(case = case_name, tasks = order.len(), "demo case scheduled");
                writeln!(out, "Scheduled Tasks:")?;
                for name in order {
                    writeln!(out, "{name}")?;
                }
            }
            Err(e) => {
                debug!(case = case_name, error = %e, "demo case rejected");
                writeln!(out, "Error: {e}")?;
            }
        }
    }
    Ok(())
}
