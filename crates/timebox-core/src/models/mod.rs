//! Data models for the timebox planner.
//!
//! The core domain shape is a [`PlannerRecord`], the state for one
//! calendar date, owning an ordered sequence of [`Task`]s plus free-text
//! notes. Display implementations for these models live in
//! [`crate::display::models`] to keep presentation out of the data layer.

pub mod record;
pub mod task;


// Re-export all public types at the models level
pub use record::{Big3Toggle, PlannerRecord, BIG3_LIMIT};
pub use task::{generate_task_id, ScheduledTime, Task, ALLOWED_START_MINUTES, DEFAULT_TIME_SPAN};
