//! Core library for the Timebox day-planner.
//!
//! This crate provides the timebox planner engine: the per-date task model
//! with its Big3 priority invariant, the time-block layout computation
//! behind the hourly timetable, the drag-and-drop controller that
//! disambiguates backlog reordering from timetable placement, and the
//! full-replace synchronization protocol that keeps the persisted record
//! in step with client edits.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): [`PlannerRecord`] owns an ordered [`Task`]
//!   sequence plus free-text notes; all in-memory mutations live here,
//!   including the at-most-three [`models::BIG3_LIMIT`] enforcement.
//! - **Timeline** ([`timeline`]): pure overlap computation mapping tasks
//!   onto fixed 60-minute blocks; the renderer never recomputes it.
//! - **Drag** ([`drag`]): tagged-payload state machine for the two drag
//!   kinds, with unconditional state clearing on gesture end.
//! - **Persistence** ([`db`], [`planner`]): date-keyed SQLite storage with
//!   upsert-parent + delete-then-reinsert child semantics, fronted by an
//!   async [`Planner`] facade.
//!
//! # Quick Start
//!
//! ```rust
//! use timebox_core::{params::AddTask, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("planner.db"))
//!     .build()
//!     .await?;
//!
//! let task = planner
//!     .add_task(&AddTask {
//!         date: "2025-03-14".to_string(),
//!         title: "Write report".to_string(),
//!         time_span: None,
//!     })
//!     .await?;
//! println!("Created task {}", task.id);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod drag;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod timeline;

// Re-export commonly used types
pub use db::Database;
pub use display::{OperationStatus, Timeline};
pub use drag::{DragController, DragPayload};
pub use error::{PlannerError, Result};
pub use models::{Big3Toggle, PlannerRecord, ScheduledTime, Task};
pub use params::{
    AddTask, DateKey, ReorderTask, SaveRecord, ScheduleTask, SetNotes, TaskRef, UpdateTask,
};
pub use planner::{Planner, PlannerBuilder};
pub use timeline::{format_hour, tasks_in_block, BlockEntry, BLOCK_HOURS};
