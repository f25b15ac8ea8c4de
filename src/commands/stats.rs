//! Daily counter commands.
//!
//! `show` renders the chart, `bump` is a cold start followed by a number of
//! increment events, and `watch` keeps one counter session alive and counts on
//! every Enter press, so a day rollover during the session resets the counter.

use super::open_store;
use crate::{
    db::day_counters::DayCounters,
    libs::{
        clock::{Clock, FixedClock, LocalClock},
        day_counter::{date_key, parse_date_key},
        messages::Message,
        statistics::{CounterSession, StatisticsController},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<StatsCommand>,
}

#[derive(Debug, Subcommand)]
enum StatsCommand {
    /// Show the chart of all recorded days
    Show,
    /// Record one or more increments for today
    Bump {
        #[arg(short, long, default_value_t = 1)]
        times: u32,
    },
    /// Count interactively, one increment per Enter press
    Watch,
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    parse_date_key(input).ok_or_else(|| Message::InvalidDate(input.to_string()).to_string())
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let (config, db) = open_store()?;
    let controller = StatisticsController::new(DayCounters::new(db, &config.label_format).await?);
    let clock: Arc<dyn Clock> = match args.date {
        Some(date) => Arc::new(FixedClock::new(date)),
        None => Arc::new(LocalClock),
    };

    match args.command.unwrap_or(StatsCommand::Show) {
        StatsCommand::Show => show(controller, clock).await,
        StatsCommand::Bump { times } => bump(controller, clock, times).await,
        StatsCommand::Watch => watch(controller, clock).await,
    }
}

async fn show(controller: StatisticsController, clock: Arc<dyn Clock>) -> Result<()> {
    let today = clock.today();
    let chart = controller.render_data(today).await?;

    msg_print!(Message::StatsHeader(date_key(today)), true);
    if chart.points.is_empty() {
        msg_info!(Message::StatsEmpty);
    } else {
        View::chart(&chart);
    }
    Ok(())
}

async fn bump(controller: StatisticsController, clock: Arc<dyn Clock>, times: u32) -> Result<()> {
    let mut session = CounterSession::start(controller, clock).await?;
    let mut chart = session.refresh().await?;
    for _ in 0..times {
        chart = session.increment().await?;
        let persisted = session.point_counter().saturating_sub(1);
        msg_success!(Message::CounterRecorded(date_key(session.last_added_date()), persisted));
    }

    View::chart(&chart);
    Ok(())
}

async fn watch(controller: StatisticsController, clock: Arc<dyn Clock>) -> Result<()> {
    let mut session = CounterSession::start(controller, clock).await?;
    msg_info!(Message::WatchStarted);
    View::chart(&session.refresh().await?);

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        let chart = session.increment().await?;
        View::chart(&chart);
        msg_print!(Message::CounterToday(date_key(session.last_added_date()), session.point_counter()));
    }

    msg_info!(Message::WatchStopped);
    Ok(())
}
