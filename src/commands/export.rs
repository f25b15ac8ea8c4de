//! Data export command.
//!
//! Writes the day-counter series or the task list as CSV or JSON, to a file
//! with `--output` or to stdout.

use super::open_store;
use crate::{
    db::{day_counters::DayCounters, tasks::Tasks},
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        statistics::StatisticsController,
        task::TaskModel,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Type of data to export
    #[arg(value_enum, default_value = "stats")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let (config, db) = open_store()?;
    let exporter = Exporter::new(args.format, args.output);

    let exported = match args.data {
        ExportData::Stats => {
            let controller = StatisticsController::new(DayCounters::new(db, &config.label_format).await?);
            let series = controller.series().await?;
            if !series.is_empty() {
                exporter.export_days(&series)?;
            }
            !series.is_empty()
        }
        ExportData::Tasks => {
            let tasks = TaskModel::new(Tasks::new(db).await?, config.tasks).get_all_tasks().await?;
            if !tasks.is_empty() {
                exporter.export_tasks(&tasks)?;
            }
            !tasks.is_empty()
        }
    };

    match (exported, exporter.output_path()) {
        (false, _) => msg_info!(Message::ExportNothing),
        (true, Some(path)) => msg_success!(Message::ExportSuccess(path.display().to_string())),
        (true, None) => {}
    }
    Ok(())
}
