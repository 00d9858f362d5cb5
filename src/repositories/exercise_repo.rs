use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExercisePayload, FromSqliteRow};

const SELECT_COLUMNS: &str = "SELECT id, name, reps, weight, unit, date FROM exercises";

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a blocking closure against a pooled connection.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&rusqlite::Connection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            f(&conn)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn insert(&self, payload: ExercisePayload) -> Result<Exercise> {
        let exercise = Exercise::from_payload(Uuid::new_v4().to_string(), payload);
        let row = exercise.clone();

        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO exercises (id, name, reps, weight, unit, date)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![row.id, row.name, row.reps, row.weight, row.unit, row.date],
            )?;
            Ok(())
        })
        .await?;

        tracing::debug!("Inserted exercise {}", exercise.id);
        Ok(exercise)
    }

    /// Every exercise, in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Exercise>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY rowid"))?;
            let exercises = stmt
                .query_map([], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Exercise>> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?"))?;
            let result = stmt.query_row([&id], Exercise::from_row).optional()?;
            Ok(result)
        })
        .await
    }

    /// Replace all five business fields. Returns `false` when no row has `id`.
    pub async fn update_by_id(&self, id: &str, payload: ExercisePayload) -> Result<bool> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let rows = conn.execute(
                "UPDATE exercises SET name = ?, reps = ?, weight = ?, unit = ?, date = ?
                 WHERE id = ?",
                rusqlite::params![
                    payload.name,
                    payload.reps,
                    payload.weight,
                    payload.unit,
                    payload.date,
                    id
                ],
            )?;
            tracing::debug!("Updated exercise {} ({} row(s))", id, rows);
            Ok(rows > 0)
        })
        .await
    }

    /// Delete by primary key. Returns the number of rows removed, 0 or 1.
    pub async fn delete_by_id(&self, id: &str) -> Result<usize> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let rows = conn.execute("DELETE FROM exercises WHERE id = ?", [&id])?;
            tracing::debug!("Deleted exercise {} ({} row(s))", id, rows);
            Ok(rows)
        })
        .await
    }
}
