mod common;

use common::create_test_planner;
use timebox_core::{
    params::{AddTask, DateKey, SaveRecord, TaskRef, UpdateTask},
    PlannerRecord, ScheduledTime, Task,
};

const DATE: &str = "2025-03-14";

fn date_key() -> DateKey {
    DateKey {
        date: DATE.to_string(),
    }
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut task = Task::new("1693000000001", "Write report");
    task.time_span = 180;
    task.is_big3 = true;
    task.scheduled = Some(ScheduledTime::new(13, 0).expect("valid placement"));

    let record = PlannerRecord {
        tasks: vec![task, Task::new("1693000000002", "Email")],
        notes: Some("notes".to_string()),
        reflection: Some("reflection".to_string()),
    };

    planner
        .save_record(&SaveRecord {
            date: DATE.to_string(),
            record: record.clone(),
        })
        .await
        .expect("Failed to save record");

    let loaded = planner.load_record(&date_key()).await.expect("load failed");
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn test_update_task_fields() {
    let (_temp_dir, planner) = create_test_planner().await;

    let task = planner
        .add_task(&AddTask {
            date: DATE.to_string(),
            title: "Draft".to_string(),
            time_span: None,
        })
        .await
        .expect("Failed to add task");

    planner
        .update_task(&UpdateTask {
            date: DATE.to_string(),
            task_id: task.id.clone(),
            title: Some("Final draft".to_string()),
            time_span: Some(180),
        })
        .await
        .expect("Failed to update task");

    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert_eq!(record.tasks[0].title, "Final draft");
    assert_eq!(record.tasks[0].time_span, 180);
    // Untouched fields survive the edit
    assert!(!record.tasks[0].is_big3);
    assert!(record.tasks[0].scheduled.is_none());
}

#[tokio::test]
async fn test_remove_task_shrinks_sequence() {
    let (_temp_dir, planner) = create_test_planner().await;

    let keep = planner
        .add_task(&AddTask {
            date: DATE.to_string(),
            title: "Keep".to_string(),
            time_span: None,
        })
        .await
        .expect("Failed to add task");
    let drop = planner
        .add_task(&AddTask {
            date: DATE.to_string(),
            title: "Drop".to_string(),
            time_span: None,
        })
        .await
        .expect("Failed to add task");

    let removed = planner
        .remove_task(&TaskRef {
            date: DATE.to_string(),
            task_id: drop.id.clone(),
        })
        .await
        .expect("Failed to remove task");
    assert_eq!(removed.id, drop.id);

    let record = planner.load_record(&date_key()).await.expect("load failed");
    assert_eq!(record.tasks.len(), 1);
    assert_eq!(record.tasks[0].id, keep.id);
}

#[tokio::test]
async fn test_generated_task_ids_are_unique() {
    let (_temp_dir, planner) = create_test_planner().await;

    for i in 0..5 {
        planner
            .add_task(&AddTask {
                date: DATE.to_string(),
                title: format!("Task {i}"),
                time_span: None,
            })
            .await
            .expect("Failed to add task");
    }

    let record = planner.load_record(&date_key()).await.expect("load failed");
    let mut ids: Vec<&str> = record.tasks.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}
