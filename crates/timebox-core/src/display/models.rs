//! Display implementations for domain models.
//!
//! Markdown-formatted output: a record renders its Big3 ranks, the full
//! backlog with scheduled markers, and the free-text sections.

use std::fmt;

use crate::models::{PlannerRecord, Task};
use crate::timeline::format_hour;

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        };
        write!(f, "{title}")?;

        if self.time_span >= 60 && self.time_span % 60 == 0 {
            write!(f, " ({}h)", self.time_span / 60)?;
        } else {
            write!(f, " ({}m)", self.time_span)?;
        }

        if let Some(scheduled) = self.scheduled {
            write!(f, " @ {}", format_hour(scheduled.start_hour))?;
        }
        Ok(())
    }
}

impl fmt::Display for PlannerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Big3")?;
        writeln!(f)?;
        let mut any_big3 = false;
        for (rank, task) in self.big3_tasks().enumerate() {
            any_big3 = true;
            writeln!(f, "{}. {}", rank + 1, task)?;
        }
        if !any_big3 {
            writeln!(f, "No Big3 picked yet.")?;
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks for this date.")?;
        }
        for (index, task) in self.tasks.iter().enumerate() {
            let big3_marker = if task.is_big3 { " ★" } else { "" };
            writeln!(f, "{index}. [{}] {}{big3_marker}", task.id, task)?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        if let Some(reflection) = &self.reflection {
            writeln!(f, "\n## Reflection")?;
            writeln!(f)?;
            writeln!(f, "{reflection}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{PlannerRecord, ScheduledTime, Task};

    #[test]
    fn test_task_display() {
        let mut task = Task::new("1", "Write report");
        task.time_span = 120;
        assert_eq!(task.to_string(), "Write report (2h)");

        task.scheduled = Some(ScheduledTime::new(14, 0).unwrap());
        assert_eq!(task.to_string(), "Write report (2h) @ 2 PM");

        let untitled = Task::new("2", "");
        assert_eq!(untitled.to_string(), "(untitled) (1h)");
    }

    #[test]
    fn test_record_display_sections() {
        let mut record = PlannerRecord {
            tasks: vec![Task::new("1", "Plan sprint")],
            notes: Some("morning focus".to_string()),
            reflection: None,
        };
        record.toggle_big3("1").unwrap();

        let output = record.to_string();
        assert!(output.contains("## Big3"));
        assert!(output.contains("1. Plan sprint"));
        assert!(output.contains("## Notes"));
        assert!(output.contains("morning focus"));
        assert!(!output.contains("## Reflection"));
    }
}
