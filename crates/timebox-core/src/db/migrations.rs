//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, PlannerError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection; cascade delete of child
        // tasks depends on it
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // The reflection column postdates the original schema; add it to
        // databases created before it existed
        let has_reflection_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('planners') WHERE name = 'reflection'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_reflection_column {
            self.connection
                .execute("ALTER TABLE planners ADD COLUMN reflection TEXT", [])
                .map_err(|e| {
                    PlannerError::database_error(
                        "Failed to add reflection column to planners table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
