//! High-level planner API for managing date-keyed records.
//!
//! This module provides the main [`Planner`] interface for the timebox
//! planning engine. The planner coordinates between interface layers and
//! the database: record operations map straight onto the synchronization
//! protocol, and task operations run the full client edit cycle: load the
//! date's record, apply the in-memory mutation, then write the whole
//! record back with the full-replace save.
//!
//! All operations are async; every blocking database call runs on the
//! tokio blocking pool via `spawn_blocking`.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with
//!   configuration
//! - [`record_ops`]: Whole-record operations (load, save, delete)
//! - [`task_ops`]: Task-level mutations (add, edit, Big3 toggle, reorder,
//!   schedule/unschedule)

use std::path::PathBuf;

pub mod builder;
pub mod record_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing planner records.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
