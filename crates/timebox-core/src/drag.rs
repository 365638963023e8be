//! Drag-and-drop controller for backlog reordering and timetable placement.
//!
//! Two mutually exclusive drag kinds exist, disambiguated by which payload
//! fields were attached when the gesture began. A reorder gesture carries
//! the source index alongside the task id; a placement gesture carries the
//! id alone. Each drop surface consumes only its own kind: the backlog list
//! reacts to reorder payloads, the timetable to placement payloads, and
//! either one silently ignores the other.
//!
//! At most one gesture is in flight at a time, tracked by the controller's
//! transient state rather than any lock. Ending a gesture clears that state
//! unconditionally, whether or not a drop mutated anything, so a cancelled
//! drag can never leave a stuck in-progress state behind.

use log::debug;

use crate::error::Result;
use crate::models::PlannerRecord;

/// Tagged payload carried through a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// Reorder within the backlog list; carries the source position
    Reorder {
        task_id: String,
        source_index: usize,
    },
    /// Place onto the timetable; started from the backlog or from an
    /// already-scheduled block
    Place { task_id: String },
}

/// Single-gesture drag state machine.
#[derive(Debug, Default)]
pub struct DragController {
    in_flight: Option<DragPayload>,
}

impl DragController {
    /// Creates a controller with no gesture in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// The payload of the current gesture, if one is in flight.
    pub fn payload(&self) -> Option<&DragPayload> {
        self.in_flight.as_ref()
    }

    /// Begins a reorder gesture from the backlog list.
    ///
    /// Ignored while another gesture is in flight; the previous gesture has
    /// to end before a new one can begin.
    pub fn begin_reorder(&mut self, task_id: impl Into<String>, source_index: usize) {
        if self.in_flight.is_some() {
            debug!("ignoring drag start: a gesture is already in flight");
            return;
        }
        self.in_flight = Some(DragPayload::Reorder {
            task_id: task_id.into(),
            source_index,
        });
    }

    /// Begins a placement gesture.
    pub fn begin_place(&mut self, task_id: impl Into<String>) {
        if self.in_flight.is_some() {
            debug!("ignoring drag start: a gesture is already in flight");
            return;
        }
        self.in_flight = Some(DragPayload::Place {
            task_id: task_id.into(),
        });
    }

    /// Drop handler for the backlog list at `target_index`.
    ///
    /// Consumes only reorder payloads; a placement payload (no index tag)
    /// is not this surface's kind and is ignored. Returns whether the
    /// sequence changed.
    pub fn drop_on_list(
        &mut self,
        record: &mut PlannerRecord,
        target_index: usize,
    ) -> Result<bool> {
        match &self.in_flight {
            Some(DragPayload::Reorder { source_index, .. }) => {
                record.move_task(*source_index, target_index)
            }
            Some(DragPayload::Place { .. }) | None => Ok(false),
        }
    }

    /// Drop handler for the timetable block starting at `hour`.
    ///
    /// Consumes only placement payloads; a reorder payload is ignored.
    /// The reference granularity is whole hours, so the minute is always 0.
    /// Redropping onto the task's current hour is a no-op.
    pub fn drop_on_block(&mut self, record: &mut PlannerRecord, hour: u8) -> Result<bool> {
        match &self.in_flight {
            Some(DragPayload::Place { task_id }) => record.schedule(task_id, hour),
            Some(DragPayload::Reorder { .. }) | None => Ok(false),
        }
    }

    /// Ends the gesture, clearing the transient state unconditionally.
    ///
    /// Called after every drop and also when a drag is released outside any
    /// valid target.
    pub fn end(&mut self) {
        self.in_flight = None;
    }
}
