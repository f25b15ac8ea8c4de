//! Projection of the stored day counters into bar-chart render data.
//!
//! [`project`] is pure: it never touches storage and returns the same
//! [`ChartRenderData`] for the same input.

use super::day_counter::DayCounter;
use serde::Serialize;

/// Minimum number of stored labels before custom axis labels are attached.
pub const MIN_LABELS: usize = 2;

/// Padding added on both sides of the x axis so the outer bars are fully visible.
const X_PADDING: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRenderData {
    pub points: Vec<ChartPoint>,
    pub x_bounds: Bounds,
    pub y_bounds: Bounds,
    /// Horizontal axis labels, `None` when the shell should fall back to its
    /// default labelling.
    pub labels: Option<Vec<String>>,
}

/// Builds the render data for `series`, which must be ordered by date.
///
/// `labels` is the formatted-date column in the same order. When it holds at
/// least [`MIN_LABELS`] entries, `today_label` is appended to it (an empty
/// string when today has no row) and the result becomes the axis labels.
pub fn project(series: &[DayCounter], labels: &[String], today_label: Option<&str>) -> ChartRenderData {
    let points = series
        .iter()
        .enumerate()
        .map(|(index, counter)| ChartPoint {
            x: (index + 1) as f64,
            y: f64::from(counter.value),
        })
        .collect();

    let max_y = series.iter().map(|counter| counter.value).max().unwrap_or(0);

    let labels = (labels.len() >= MIN_LABELS).then(|| {
        let mut all = labels.to_vec();
        all.push(today_label.unwrap_or_default().to_string());
        all
    });

    ChartRenderData {
        points,
        x_bounds: Bounds {
            min: X_PADDING,
            max: series.len() as f64 + X_PADDING,
        },
        y_bounds: Bounds {
            min: 0.0,
            max: f64::from(max_y),
        },
        labels,
    }
}
