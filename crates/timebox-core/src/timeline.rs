//! Time-block layout engine for the hourly timetable.
//!
//! The timetable divides the planner day into fixed 60-minute blocks. A
//! planner day starts at 06:00 and wraps through midnight to end at 02:00,
//! so the display order is not a simple modulo walk: hours 6 through 23,
//! then the next morning's 1 and 2. Each block is identified by its
//! starting clock hour.
//!
//! Overlap detection is the only derived view the renderer needs; callers
//! must not recompute it themselves.

use crate::models::Task;

/// Block starting hours in display order (planner day 06:00 -> 02:00).
pub const BLOCK_HOURS: [u8; 20] = [
    6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 1, 2,
];

/// A task's relationship to one timetable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEntry<'a> {
    /// The intersecting task
    pub task: &'a Task,

    /// True for the block where the task starts; renderers draw that one
    /// interactive and every later intersecting block as a continuation
    /// marker.
    pub is_start: bool,
}

/// Selects every scheduled task whose occupied interval overlaps the
/// one-hour block starting at `hour`.
///
/// Half-open interval overlap in minutes since midnight:
/// `task.start < block.end && task.end > block.start`. Multiple tasks may
/// legitimately land in the same block; all of them are returned in input
/// order and the caller stacks them. Pure and side-effect-free.
pub fn tasks_in_block<'a>(tasks: &'a [Task], hour: u8) -> Vec<BlockEntry<'a>> {
    let block_start = u32::from(hour) * 60;
    let block_end = block_start + 60;

    tasks
        .iter()
        .filter_map(|task| {
            let scheduled = task.scheduled?;
            let (start, end) = task.occupied_interval()?;
            (start < block_end && end > block_start).then_some(BlockEntry {
                task,
                is_start: scheduled.start_hour == hour,
            })
        })
        .collect()
}

/// Formats a block's starting hour as its timetable label.
///
/// Hours 1 and 2 are the next morning's small hours at the tail of the
/// planner day. The mapping is presentational but format-sensitive.
pub fn format_hour(hour: u8) -> String {
    match hour {
        6..=11 => format!("{hour} AM"),
        12 => "12 PM".to_string(),
        13..=23 => format!("{} PM", hour - 12),
        1..=2 => format!("{hour} AM"),
        _ => format!("{hour}"),
    }
}
