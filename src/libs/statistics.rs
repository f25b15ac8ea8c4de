//! Daily statistics flow: read and write today's counter, then rebuild the
//! chart from the full stored series.
//!
//! [`StatisticsController`] mediates between the shell and the
//! [`DayCounters`] repository. [`CounterSession`] is the in-memory state the
//! shell keeps between increment events (`point_counter` and the date of the
//! last recorded update).
//!
//! ## Increment ordering
//!
//! On each increment the session first checks for a rollover. If the date
//! changed since the last update, the counter is reset to zero and the marker
//! moves to the new date. The current counter value is then persisted, and
//! only after the write completes is the in-memory counter incremented. The
//! first event of a new day therefore stores `0` for that day.

use super::chart::{self, ChartRenderData};
use super::clock::Clock;
use super::day_counter::DayCounter;
use super::error::AppResult;
use crate::db::day_counters::DayCounters;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct StatisticsController {
    repository: DayCounters,
}

impl StatisticsController {
    pub fn new(repository: DayCounters) -> Self {
        StatisticsController { repository }
    }

    pub async fn get_data_by_date(&self, date: NaiveDate) -> AppResult<Option<DayCounter>> {
        self.repository.get_by_date(date).await
    }

    /// Persists `value` as the counter for `date`.
    pub async fn insert_or_update_data(&self, date: NaiveDate, value: u32) -> AppResult<()> {
        self.repository.insert_or_update(date, value).await
    }

    /// Re-reads the full series and projects it for rendering, with the label
    /// of `today` appended to the axis labels.
    pub async fn render_data(&self, today: NaiveDate) -> AppResult<ChartRenderData> {
        let series = self.repository.get_all().await?;
        let labels = self.repository.get_formatted_date_labels().await?;
        let today_label = self.get_data_by_date(today).await?.map(|counter| counter.formatted_date);
        Ok(chart::project(&series, &labels, today_label.as_deref()))
    }

    pub async fn series(&self) -> AppResult<Vec<DayCounter>> {
        self.repository.get_all().await
    }
}

pub struct CounterSession {
    controller: StatisticsController,
    clock: Arc<dyn Clock>,
    point_counter: u32,
    last_added_date: NaiveDate,
}

impl CounterSession {
    /// Cold start: seeds the counter from today's stored row, or zero when
    /// today has none.
    pub async fn start(controller: StatisticsController, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let today = clock.today();
        let point_counter = controller
            .get_data_by_date(today)
            .await?
            .map(|counter| counter.value)
            .unwrap_or(0);
        debug!(%today, point_counter, "counter session started");

        Ok(CounterSession {
            controller,
            clock,
            point_counter,
            last_added_date: today,
        })
    }

    /// Resumes a session from previously held state.
    pub fn with_state(
        controller: StatisticsController,
        clock: Arc<dyn Clock>,
        point_counter: u32,
        last_added_date: NaiveDate,
    ) -> Self {
        CounterSession {
            controller,
            clock,
            point_counter,
            last_added_date,
        }
    }

    pub fn point_counter(&self) -> u32 {
        self.point_counter
    }

    pub fn last_added_date(&self) -> NaiveDate {
        self.last_added_date
    }

    /// Handles one increment event and returns the refreshed chart.
    pub async fn increment(&mut self) -> AppResult<ChartRenderData> {
        let current_date = self.clock.today();
        if current_date != self.last_added_date {
            info!(from = %self.last_added_date, to = %current_date, "day rollover, counter reset");
            self.point_counter = 0;
            self.last_added_date = current_date;
        }

        let value = self.point_counter;
        self.controller.insert_or_update_data(current_date, value).await?;
        self.point_counter = self.point_counter.saturating_add(1);
        debug!(date = %current_date, persisted = value, point_counter = self.point_counter, "increment recorded");

        self.controller.render_data(current_date).await
    }

    /// Renders the chart for the clock's current date without changing state.
    pub async fn refresh(&self) -> AppResult<ChartRenderData> {
        self.controller.render_data(self.clock.today()).await
    }
}
