//! Per-day counter storage.
//!
//! One row per calendar day, keyed by the `yyyy-MM-dd` date string. Rows are
//! created on the first write for a date and updated in place afterwards; this
//! module never deletes them.

use super::db::Db;
use crate::libs::day_counter::{date_key, format_label, DayCounter};
use crate::libs::error::AppResult;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

const SCHEMA_DATA_ENTITIES: &str = "CREATE TABLE IF NOT EXISTS data_entities (
    date TEXT NOT NULL PRIMARY KEY,
    value INTEGER NOT NULL DEFAULT 0,
    formatted_date TEXT NOT NULL
);";
const SELECT_BY_DATE: &str = "SELECT date, value, formatted_date FROM data_entities WHERE date = ?1";
const UPSERT: &str = "INSERT INTO data_entities (date, value, formatted_date) VALUES (?1, ?2, ?3)
    ON CONFLICT(date) DO UPDATE SET value = excluded.value, formatted_date = excluded.formatted_date";
const SELECT_ALL: &str = "SELECT date, value, formatted_date FROM data_entities ORDER BY date ASC";
const SELECT_LABELS: &str = "SELECT formatted_date FROM data_entities ORDER BY date ASC";

#[derive(Clone)]
pub struct DayCounters {
    db: Db,
    label_format: String,
}

impl DayCounters {
    pub async fn new(db: Db, label_format: &str) -> AppResult<Self> {
        db.call(|conn| conn.execute(SCHEMA_DATA_ENTITIES, [])).await?;
        Ok(DayCounters {
            db,
            label_format: label_format.to_string(),
        })
    }

    /// Returns the counter stored for `date`, or `None` when the day has no row yet.
    pub async fn get_by_date(&self, date: NaiveDate) -> AppResult<Option<DayCounter>> {
        let key = date_key(date);
        debug!(date = %key, "fetching day counter");
        self.db
            .call(move |conn| conn.query_row(SELECT_BY_DATE, [&key], map_row).optional())
            .await
    }

    /// Stores `value` for `date`, inserting the row if the day has none.
    ///
    /// Fails with [`AppError::InvalidDate`](crate::libs::error::AppError::InvalidDate)
    /// before touching the store when the label format cannot render a date.
    ///
    /// The upsert is a single statement, so interleaved writers for the same
    /// date can never produce a second row.
    pub async fn insert_or_update(&self, date: NaiveDate, value: u32) -> AppResult<()> {
        let key = date_key(date);
        let label = format_label(date, &self.label_format)?;
        debug!(date = %key, value, "upserting day counter");
        self.db
            .call(move |conn| conn.execute(UPSERT, params![key, value, label]))
            .await?;
        Ok(())
    }

    /// All stored counters, oldest date first.
    pub async fn get_all(&self) -> AppResult<Vec<DayCounter>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(SELECT_ALL)?;
                let rows = stmt.query_map([], map_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await
    }

    /// The `formatted_date` column in the same order as [`DayCounters::get_all`].
    pub async fn get_formatted_date_labels(&self) -> AppResult<Vec<String>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(SELECT_LABELS)?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect::<rusqlite::Result<Vec<String>>>()
            })
            .await
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<DayCounter> {
    Ok(DayCounter {
        date: row.get(0)?,
        value: row.get(1)?,
        formatted_date: row.get(2)?,
    })
}
