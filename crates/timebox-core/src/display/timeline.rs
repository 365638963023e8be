//! Timetable rendering wrapper.

use std::fmt;

use crate::models::Task;
use crate::timeline::{format_hour, tasks_in_block, BLOCK_HOURS};

/// Renders the full 20-block timetable for a task list.
///
/// Walks the fixed block order and asks the layout engine which tasks
/// intersect each block; continuation blocks get a non-interactive marker.
/// This wrapper is the only consumer of the block walk outside the engine
/// itself.
pub struct Timeline<'a>(pub &'a [Task]);

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Time Table")?;
        writeln!(f)?;

        for hour in BLOCK_HOURS {
            let entries = tasks_in_block(self.0, hour);
            if entries.is_empty() {
                writeln!(f, "- **{}**:", format_hour(hour))?;
                continue;
            }

            let rendered: Vec<String> = entries
                .iter()
                .map(|entry| {
                    let title = if entry.task.title.is_empty() {
                        "(untitled)"
                    } else {
                        &entry.task.title
                    };
                    if entry.is_start {
                        title.to_string()
                    } else {
                        format!("{title} (cont.)")
                    }
                })
                .collect();
            writeln!(f, "- **{}**: {}", format_hour(hour), rendered.join(" | "))?;
        }

        Ok(())
    }
}
