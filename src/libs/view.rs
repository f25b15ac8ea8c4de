use super::chart::ChartRenderData;
use super::task::Task;
use prettytable::{row, Table};

/// Width in characters of the longest bar.
const BAR_WIDTH: f64 = 40.0;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "PRIORITY", "ICON"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.description,
                task.priority,
                task.icon.map(|icon| icon.to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();
    }

    pub fn chart(data: &ChartRenderData) {
        println!("{}", Self::chart_lines(data).join("\n"));
    }

    /// Text rendering of `data`: one horizontal bar per point, labelled with the
    /// stored date label when custom labels are present and the rank otherwise.
    /// The appended label for today is shown in a footer line.
    pub fn chart_lines(data: &ChartRenderData) -> Vec<String> {
        let labels: Vec<String> = match &data.labels {
            Some(labels) => labels.iter().take(data.points.len()).cloned().collect(),
            None => data.points.iter().map(|point| format!("{}", point.x)).collect(),
        };
        let label_width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);
        let scale = if data.y_bounds.max > 0.0 { BAR_WIDTH / data.y_bounds.max } else { 0.0 };

        let mut lines: Vec<String> = data
            .points
            .iter()
            .zip(labels.iter())
            .map(|(point, label)| {
                let bar = "█".repeat((point.y * scale).round() as usize);
                format!("{label:>label_width$} │{bar} {}", point.y)
            })
            .collect();

        if let Some(today) = data.labels.as_ref().and_then(|labels| labels.last()) {
            lines.push(format!("{:>label_width$} └ today: {}", "", today));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::chart::{project, Bounds};
    use crate::libs::day_counter::{DayCounter, DEFAULT_LABEL_FORMAT};
    use chrono::NaiveDate;

    #[test]
    fn longest_bar_matches_max_value() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let series = vec![
            DayCounter::new(date, 2, DEFAULT_LABEL_FORMAT).unwrap(),
            DayCounter::new(date.succ_opt().unwrap(), 4, DEFAULT_LABEL_FORMAT).unwrap(),
        ];
        let labels: Vec<String> = series.iter().map(|c| c.formatted_date.clone()).collect();
        let lines = View::chart_lines(&project(&series, &labels, Some("02.05.")));

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("01.05. │"));
        assert_eq!(lines[1].matches('█').count(), 40);
        assert_eq!(lines[0].matches('█').count(), 20);
        assert!(lines[2].ends_with("today: 02.05."));
    }

    #[test]
    fn empty_chart_renders_nothing() {
        let data = ChartRenderData {
            points: Vec::new(),
            x_bounds: Bounds { min: 0.5, max: 0.5 },
            y_bounds: Bounds { min: 0.0, max: 0.0 },
            labels: None,
        };
        assert!(View::chart_lines(&data).is_empty());
    }
}
