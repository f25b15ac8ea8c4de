use super::error::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Key format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default format of the display label stored next to each date.
pub const DEFAULT_LABEL_FORMAT: &str = "%d.%m.";

/// Counter for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounter {
    pub date: NaiveDate,
    pub value: u32,
    pub formatted_date: String,
}

impl DayCounter {
    pub fn new(date: NaiveDate, value: u32, label_format: &str) -> AppResult<Self> {
        Ok(DayCounter {
            date,
            value,
            formatted_date: format_label(date, label_format)?,
        })
    }

    /// The `yyyy-MM-dd` key under which the row is stored.
    pub fn key(&self) -> String {
        date_key(self.date)
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders the display label of `date`.
///
/// Patterns that need a time or an offset (`%H`, `%z`, ...) cannot be applied
/// to a bare date and yield [`AppError::InvalidDate`].
pub fn format_label(date: NaiveDate, label_format: &str) -> AppResult<String> {
    let mut label = String::new();
    write!(label, "{}", date.format(label_format))
        .map_err(|_| AppError::InvalidDate(format!("{} cannot be rendered with '{label_format}'", date_key(date))))?;
    Ok(label)
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_FORMAT).ok()
}
