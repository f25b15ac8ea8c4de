//! Core library modules for the kolecko application.
//!
//! - **Statistics**: per-day counters, the counter session and chart projection
//! - **Tasks**: task model with configurable attribute defaults
//! - **Infrastructure**: configuration, data directory, errors, messages
//! - **Presentation**: console rendering and export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kolecko::db::{db::Db, day_counters::DayCounters};
//! use kolecko::libs::clock::LocalClock;
//! use kolecko::libs::statistics::{CounterSession, StatisticsController};
//! use std::sync::Arc;
//!
//! # async fn demo() -> kolecko::libs::error::AppResult<()> {
//! let db = Db::open_in_memory()?;
//! let controller = StatisticsController::new(DayCounters::new(db, "%d.%m.").await?);
//! let mut session = CounterSession::start(controller, Arc::new(LocalClock)).await?;
//! let chart = session.increment().await?;
//! assert_eq!(chart.points.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod day_counter;
pub mod error;
pub mod export;
pub mod messages;
pub mod statistics;
pub mod task;
pub mod view;
