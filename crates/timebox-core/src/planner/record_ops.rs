//! Whole-record operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::PlannerRecord,
    params::{DateKey, SaveRecord},
};

impl Planner {
    /// Retrieves the record persisted for a date, or `None` when the date
    /// has never been saved.
    pub async fn get_record(&self, params: &DateKey) -> Result<Option<PlannerRecord>> {
        let db_path = self.db_path.clone();
        let date = params.date.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_record(&date)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Loads the record for a date, substituting the empty-record factory
    /// when nothing is persisted yet. This is the view layer's read path:
    /// absence of a record is a fresh day, not an error.
    pub async fn load_record(&self, params: &DateKey) -> Result<PlannerRecord> {
        Ok(self
            .get_record(params)
            .await?
            .unwrap_or_else(PlannerRecord::empty))
    }

    /// Saves a full record under a date using the full-replace protocol.
    pub async fn save_record(&self, params: &SaveRecord) -> Result<()> {
        let db_path = self.db_path.clone();
        let date = params.date.clone();
        let record = params.record.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_record(&date, &record)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a date's record and all its child tasks. Deleting a date
    /// with no record succeeds.
    pub async fn delete_record(&self, params: &DateKey) -> Result<()> {
        let db_path = self.db_path.clone();
        let date = params.date.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_record(&date)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
