//! # Kolecko
//!
//! A command-line utility for keeping a personal task list and counting daily
//! progress, with a bar chart of the recorded days.
//!
//! ## Features
//!
//! - **Daily Statistics**: one counter per calendar day with rollover handling
//! - **Chart Projection**: stored series turned into bars, bounds and labels
//! - **Task Management**: create, list and delete tasks
//! - **Data Export**: statistics and tasks as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kolecko::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
