//! Display formatting for planner records and the timetable.
//!
//! Domain models implement [`std::fmt::Display`] producing markdown
//! (implementations live in [`models`] to keep presentation out of the
//! data layer), and newtype wrappers provide the contextual views the CLI
//! renders: the full timetable ([`Timeline`]) and operation feedback
//! ([`OperationStatus`]).
//!
//! All output is markdown so the terminal renderer can style it or fall
//! back to plain text unchanged.

pub mod models;
pub mod status;
pub mod timeline;

// Re-export commonly used types for convenience
pub use status::OperationStatus;
pub use timeline::Timeline;
