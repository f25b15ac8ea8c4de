//! Task table: insert, list and delete.

use super::db::Db;
use crate::libs::error::AppResult;
use crate::libs::task::Task;
use rusqlite::{params, Row};
use tracing::debug;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    priority INTEGER NOT NULL DEFAULT 0,
    icon INTEGER
);";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, priority, icon) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT id, title, description, priority, icon FROM tasks ORDER BY id";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

#[derive(Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub async fn new(db: Db) -> AppResult<Tasks> {
        db.call(|conn| conn.execute(SCHEMA_TASKS, [])).await?;

        Ok(Tasks { db })
    }

    /// Stores `task` and returns the id it was given.
    pub async fn insert(&self, task: &Task) -> AppResult<i64> {
        let task = task.clone();
        debug!(title = %task.title, "inserting task");
        self.db
            .call(move |conn| {
                conn.execute(INSERT_TASK, params![task.title, task.description, task.priority, task.icon])?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    pub async fn fetch_all(&self) -> AppResult<Vec<Task>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(SELECT_TASKS)?;
                let task_iter = stmt.query_map([], map_row)?;
                task_iter.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await
    }

    /// Deletes the task with `id`, returning the number of removed rows.
    pub async fn delete(&self, id: i64) -> AppResult<usize> {
        debug!(id, "deleting task");
        self.db.call(move |conn| conn.execute(DELETE_TASK, [id])).await
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: row.get(3)?,
        icon: row.get(4)?,
    })
}
