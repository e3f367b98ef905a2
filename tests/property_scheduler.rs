use std::collections::HashMap;

use proptest::prelude::*;
use tasktree::hierarchy::{Priority, TaskHierarchy, TaskNode};
use tasktree::schedule::{schedule, schedule_value};

/// Tree shape without names; names are assigned afterwards so they are unique.
#[derive(Debug, Clone)]
struct Shape {
    priority: Option<i8>,
    children: Vec<Shape>,
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    // Small priority range so ties are common.
    let leaf = proptest::option::of(-2i8..3).prop_map(|priority| Shape {
        priority,
        children: Vec::new(),
    });

    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            proptest::option::of(-2i8..3),
            proptest::collection::vec(inner, 0..4),
        )
            .prop_map(|(priority, children)| Shape { priority, children })
    })
}

fn forest_strategy() -> impl Strategy<Value = TaskHierarchy> {
    proptest::collection::vec(shape_strategy(), 0..5).prop_map(|shapes| {
        let mut counter = 0;
        TaskHierarchy::new(shapes.iter().map(|s| name_shape(s, &mut counter)).collect())
    })
}

fn name_shape(shape: &Shape, counter: &mut usize) -> TaskNode {
    let name = format!("task_{counter}");
    *counter += 1;
    TaskNode {
        name,
        priority: shape.priority.map(|p| Priority::Int(i64::from(p))),
        subtasks: if shape.children.is_empty() {
            None
        } else {
            Some(shape.children.iter().map(|c| name_shape(c, counter)).collect())
        },
    }
}

/// (first, last) output positions covered by a node's subtree.
fn span(node: &TaskNode, pos: &HashMap<&str, usize>) -> (usize, usize) {
    let own = pos[node.name.as_str()];
    node.children()
        .iter()
        .map(|c| span(c, pos))
        .fold((own, own), |(lo, hi), (clo, chi)| (lo.min(clo), hi.max(chi)))
}

/// Check parent placement and sibling ordering for a group of siblings and
/// everything beneath them.
fn check_siblings(siblings: &[TaskNode], pos: &HashMap<&str, usize>) -> Result<(), TestCaseError> {
    for (i, a) in siblings.iter().enumerate() {
        let (a_lo, a_hi) = span(a, pos);
        prop_assert_eq!(pos[a.name.as_str()], a_hi, "{} is not after its subtree", &a.name);

        for b in &siblings[i + 1..] {
            let (b_lo, b_hi) = span(b, pos);
            if a.effective_priority() < b.effective_priority() {
                prop_assert!(b_hi < a_lo, "{} should precede {}", &b.name, &a.name);
            } else {
                prop_assert!(a_hi < b_lo, "{} should precede {}", &a.name, &b.name);
            }
        }

        check_siblings(a.children(), pos)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_every_node_scheduled_exactly_once(forest in forest_strategy()) {
        let order = schedule(&forest);
        prop_assert_eq!(order.len(), forest.node_count());

        let mut sorted = order.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), order.len());
    }

    #[test]
    fn test_priority_and_dependency_order(forest in forest_strategy()) {
        let order = schedule(&forest);
        let pos: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        check_siblings(&forest.tasks, &pos)?;
    }

    #[test]
    fn test_untyped_input_schedules_identically(forest in forest_strategy()) {
        let value = serde_json::to_value(&forest).unwrap();

        let first = schedule_value(&value).unwrap();
        let second = schedule_value(&value).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, schedule(&forest));
    }
}
