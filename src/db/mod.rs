//! Database layer for the kolecko application.
//!
//! Persistence is built on SQLite. A [`db::Db`] storage context is opened once
//! by the caller and passed into each repository; every repository call runs
//! on tokio's blocking pool and returns a future.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kolecko::db::{db::Db, day_counters::DayCounters};
//! use chrono::NaiveDate;
//!
//! # async fn demo() -> kolecko::libs::error::AppResult<()> {
//! let db = Db::open_in_memory()?;
//! let counters = DayCounters::new(db, "%d.%m.").await?;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! counters.insert_or_update(date, 3).await?;
//! assert_eq!(counters.get_by_date(date).await?.map(|c| c.value), Some(3));
//! # Ok(())
//! # }
//! ```

/// Storage context: connection handling and store recreation.
pub mod db;

/// Per-day counters backing the statistics chart.
pub mod day_counters;

/// Task CRUD operations.
pub mod tasks;
