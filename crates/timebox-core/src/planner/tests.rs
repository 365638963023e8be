//! Tests for the planner module.

use tempfile::TempDir;

use super::*;
use crate::error::PlannerError;
use crate::models::Big3Toggle;
use crate::params::{AddTask, DateKey, ReorderTask, ScheduleTask, SetNotes, TaskRef};

const DATE: &str = "2025-03-14";

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn date_key() -> DateKey {
    DateKey {
        date: DATE.to_string(),
    }
}

#[tokio::test]
async fn test_load_record_substitutes_empty() {
    let (_temp_dir, planner) = create_test_planner().await;

    // Nothing persisted yet: get is None, load is the empty factory
    let raw = planner.get_record(&date_key()).await.expect("get failed");
    assert!(raw.is_none());

    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert!(record.tasks.is_empty());
    assert!(record.notes.is_none());
}

#[tokio::test]
async fn test_add_task_persists_defaults() {
    let (_temp_dir, planner) = create_test_planner().await;

    let task = planner
        .add_task(&AddTask {
            date: DATE.to_string(),
            title: "Write report".to_string(),
            time_span: None,
        })
        .await
        .expect("Failed to add task");

    assert_eq!(task.time_span, 60);
    assert!(!task.is_big3);
    assert!(task.scheduled.is_none());

    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert_eq!(record.tasks.len(), 1);
    assert_eq!(record.tasks[0], task);
}

#[tokio::test]
async fn test_toggle_big3_limit_survives_reloads() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let task = planner
            .add_task(&AddTask {
                date: DATE.to_string(),
                title: format!("Task {i}"),
                time_span: None,
            })
            .await
            .expect("Failed to add task");
        ids.push(task.id);
    }

    for id in &ids[..3] {
        let outcome = planner
            .toggle_big3(&TaskRef {
                date: DATE.to_string(),
                task_id: id.clone(),
            })
            .await
            .expect("toggle should succeed");
        assert_eq!(outcome, Big3Toggle::Flagged);
    }

    // Fourth flag is rejected even though every toggle ran through its own
    // load/save cycle
    let result = planner
        .toggle_big3(&TaskRef {
            date: DATE.to_string(),
            task_id: ids[3].clone(),
        })
        .await;
    assert!(matches!(result, Err(PlannerError::Big3Limit)));

    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert_eq!(record.big3_tasks().count(), 3);
}

#[tokio::test]
async fn test_reorder_gesture_round_trip() {
    let (_temp_dir, planner) = create_test_planner().await;

    for i in 0..3 {
        planner
            .add_task(&AddTask {
                date: DATE.to_string(),
                title: format!("Task {i}"),
                time_span: None,
            })
            .await
            .expect("Failed to add task");
    }

    let moved = planner
        .reorder_task(&ReorderTask {
            date: DATE.to_string(),
            source_index: 0,
            target_index: 3,
        })
        .await
        .expect("Failed to reorder");
    assert!(moved);

    let record = planner.load_record(&date_key()).await.expect("load failed");
    let titles: Vec<&str> = record.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Task 1", "Task 2", "Task 0"]);
}

#[tokio::test]
async fn test_schedule_gesture_is_idempotent() {
    let (_temp_dir, planner) = create_test_planner().await;

    let task = planner
        .add_task(&AddTask {
            date: DATE.to_string(),
            title: "Deep work".to_string(),
            time_span: Some(120),
        })
        .await
        .expect("Failed to add task");

    let params = ScheduleTask {
        date: DATE.to_string(),
        task_id: task.id.clone(),
        start_hour: 9,
    };
    assert!(planner.schedule_task(&params).await.expect("schedule failed"));
    // Redrop onto the same hour: no observable change
    assert!(!planner.schedule_task(&params).await.expect("schedule failed"));

    let record = planner.load_record(&date_key()).await.expect("load failed");
    let scheduled = record.tasks[0].scheduled.expect("task should be scheduled");
    assert_eq!(scheduled.start_hour, 9);
    assert_eq!(scheduled.start_minute, 0);
}

#[tokio::test]
async fn test_unschedule_returns_task_to_backlog() {
    let (_temp_dir, planner) = create_test_planner().await;

    let task = planner
        .add_task(&AddTask {
            date: DATE.to_string(),
            title: "Errand".to_string(),
            time_span: None,
        })
        .await
        .expect("Failed to add task");

    planner
        .schedule_task(&ScheduleTask {
            date: DATE.to_string(),
            task_id: task.id.clone(),
            start_hour: 15,
        })
        .await
        .expect("schedule failed");

    let cleared = planner
        .unschedule_task(&TaskRef {
            date: DATE.to_string(),
            task_id: task.id.clone(),
        })
        .await
        .expect("unschedule failed");
    assert!(cleared);

    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert!(record.tasks[0].scheduled.is_none());
    assert_eq!(record.unscheduled_tasks().count(), 1);
}

#[tokio::test]
async fn test_set_notes_preserves_other_field() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_notes(&SetNotes {
            date: DATE.to_string(),
            notes: Some("Focus before lunch".to_string()),
            reflection: None,
        })
        .await
        .expect("set_notes failed");
    planner
        .set_notes(&SetNotes {
            date: DATE.to_string(),
            notes: None,
            reflection: Some("Went well".to_string()),
        })
        .await
        .expect("set_notes failed");

    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert_eq!(record.notes.as_deref(), Some("Focus before lunch"));
    assert_eq!(record.reflection.as_deref(), Some("Went well"));
}

#[tokio::test]
async fn test_delete_record_then_load_is_fresh() {
    let (_temp_dir, planner) = create_test_planner().await;

    for i in 0..3 {
        planner
            .add_task(&AddTask {
                date: DATE.to_string(),
                title: format!("Task {i}"),
                time_span: None,
            })
            .await
            .expect("Failed to add task");
    }

    planner
        .delete_record(&date_key())
        .await
        .expect("delete failed");

    // No stale tasks may come back for the deleted date
    assert!(planner.get_record(&date_key()).await.expect("get failed").is_none());
    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert!(record.tasks.is_empty());

    // Idempotent delete
    planner
        .delete_record(&date_key())
        .await
        .expect("second delete should succeed");
}

#[tokio::test]
async fn test_invalid_date_rejected() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .add_task(&AddTask {
            date: "not-a-date".to_string(),
            title: "Task".to_string(),
            time_span: None,
        })
        .await;
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));

    let result = planner
        .get_record(&DateKey {
            date: String::new(),
        })
        .await;
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
}
