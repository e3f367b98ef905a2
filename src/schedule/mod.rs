// src/schedule/mod.rs

//! Flattening a task forest into one execution order.
//!
//! - [`scheduler`] holds the children-before-parent traversal.
//! - [`order`] sorts siblings by descending priority.

pub mod order;
pub mod scheduler;

pub use order::by_priority_desc;
pub use scheduler::{schedule, schedule_node, schedule_value};
