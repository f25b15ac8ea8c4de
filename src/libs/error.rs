//! Unified error type for the storage and statistics layers.
//!
//! Repository and controller calls return [`AppError`]; command handlers turn
//! it into `anyhow::Error` at the shell boundary.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// The blocking storage task panicked or was cancelled.
    #[error("Storage task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type AppResult<T> = Result<T, AppError>;
