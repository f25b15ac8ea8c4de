//! Export of the stored statistics series and the task list.
//!
//! Output goes to a file when a path is given and to stdout otherwise, so the
//! data can be piped into other tools.

use super::day_counter::DayCounter;
use super::task::Task;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Day counters, oldest first.
    Stats,
    Tasks,
}

#[derive(Debug, Serialize)]
pub struct ExportDay {
    pub date: String,
    pub label: String,
    pub value: u32,
}

impl From<&DayCounter> for ExportDay {
    fn from(counter: &DayCounter) -> Self {
        ExportDay {
            date: counter.key(),
            label: counter.formatted_date.clone(),
            value: counter.value,
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }

    pub fn export_days(&self, series: &[DayCounter]) -> Result<()> {
        let mut out = self.writer()?;
        write_days(self.format, series, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn export_tasks(&self, tasks: &[Task]) -> Result<()> {
        let mut out = self.writer()?;
        write_tasks(self.format, tasks, &mut out)?;
        out.flush()?;
        Ok(())
    }

    fn writer(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output_path {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout().lock()),
        })
    }
}

pub fn write_days<W: Write>(format: ExportFormat, series: &[DayCounter], out: W) -> Result<()> {
    let days: Vec<ExportDay> = series.iter().map(ExportDay::from).collect();
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["Date", "Label", "Value"])?;
            for day in &days {
                wtr.write_record([day.date.clone(), day.label.clone(), day.value.to_string()])?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => serde_json::to_writer_pretty(out, &days)?,
    }
    Ok(())
}

pub fn write_tasks<W: Write>(format: ExportFormat, tasks: &[Task], out: W) -> Result<()> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["ID", "Title", "Description", "Priority", "Icon"])?;
            for task in tasks {
                wtr.write_record([
                    task.id.unwrap_or(0).to_string(),
                    task.title.clone(),
                    task.description.clone(),
                    task.priority.to_string(),
                    task.icon.map(|icon| icon.to_string()).unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => serde_json::to_writer_pretty(out, tasks)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::day_counter::DEFAULT_LABEL_FORMAT;
    use crate::libs::task::TaskDefaults;
    use chrono::NaiveDate;

    #[test]
    fn days_csv_has_header_and_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let series = vec![DayCounter::new(date, 5, DEFAULT_LABEL_FORMAT).unwrap()];
        let mut out = Vec::new();
        write_days(ExportFormat::Csv, &series, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Date,Label,Value\n2024-01-02,02.01.,5\n");
    }

    #[test]
    fn tasks_json_keeps_optional_icon() {
        let task = Task::new("Walk", "", &TaskDefaults::default()).with_icon(7);
        let mut out = Vec::new();
        write_tasks(ExportFormat::Json, &[task], &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["icon"], 7);
        assert_eq!(value[0]["priority"], 0);
        assert!(value[0]["id"].is_null());
    }
}
