// src/schedule/order.rs

use crate::hierarchy::model::TaskNode;

/// Siblings sorted by descending effective priority.
///
/// The sort is stable, so equal priorities (including two absent ones) keep
/// their input order.
pub fn by_priority_desc(siblings: &[TaskNode]) -> Vec<&TaskNode> {
    let mut sorted: Vec<&TaskNode> = siblings.iter().collect();
    sorted.sort_by(|a, b| b.effective_priority().cmp(&a.effective_priority()));
    sorted
}
