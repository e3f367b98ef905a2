// src/hierarchy/mod.rs

//! Task hierarchy input for tasktree.
//!
//! Responsibilities:
//! - Define the typed task tree (`model.rs`).
//! - Check untyped input against the task shape (`validate.rs`).
//! - Load a hierarchy from a file or stdin (`loader.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_reader};
pub use model::{Priority, RawHierarchy, TaskHierarchy, TaskNode};
pub use validate::{validate_hierarchy, validate_task};
