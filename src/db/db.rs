//! Storage context shared by the repositories.
//!
//! A [`Db`] is opened explicitly (on a file or in memory) and handed to each
//! repository at construction time. Cloning it shares the same connection.

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::AppResult;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DB_FILE_NAME: &str = "kolecko.db";

/// Layout version written to `PRAGMA user_version`. A store carrying any
/// other non-zero version is dropped and recreated.
pub const SCHEMA_VERSION: i32 = 1;

/// Tables owned by the repositories, dropped when the store is recreated.
const TABLES: [&str; 2] = ["data_entities", "tasks"];

#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens the store configured for this user, creating it on first use.
    pub fn new(config: &Config) -> AppResult<Db> {
        let file_name = config.db_file.as_deref().unwrap_or(DB_FILE_NAME);
        let db_file_path = DataStorage::new().get_path(file_name)?;
        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> AppResult<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        debug!(path = %path.display(), "opening store");
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA busy_timeout=5000;")?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Db> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Db> {
        recreate_if_outdated(&conn)?;
        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the connection on tokio's blocking pool.
    ///
    /// Calls are serialized by the connection mutex, so a read issued after an
    /// awaited write always observes it.
    pub async fn call<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock();
            f(&mut conn)
        })
        .await??;
        Ok(result)
    }
}

fn recreate_if_outdated(conn: &Connection) -> rusqlite::Result<()> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version == SCHEMA_VERSION {
        return Ok(());
    }
    if version != 0 {
        warn!(found = version, expected = SCHEMA_VERSION, "store layout changed, recreating tables");
        for table in TABLES {
            conn.execute(&format!("DROP TABLE IF EXISTS {table}"), [])?;
        }
    }
    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    Ok(())
}
