use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} \"{}\" created", id, title),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasks => "No tasks yet.".to_string(),
            Message::NoTaskIdsProvided => "No task IDs provided for deletion.".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s) successfully.", count),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} task(s)?", count),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader(date) => format!("Daily statistics, today is {}", date),
            Message::StatsEmpty => "No statistics recorded yet.".to_string(),
            Message::CounterRecorded(date, value) => format!("Recorded {} for {}", value, date),
            Message::CounterToday(date, value) => format!("Counter for {}: {}", date, value),
            Message::WatchStarted => "Press Enter to count, type q and Enter to quit.".to_string(),
            Message::WatchStopped => "Counting stopped.".to_string(),
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::PromptLabelFormat => "Chart label format (strftime)".to_string(),
            Message::PromptDefaultPriority => "Default task priority".to_string(),
            Message::LabelFormatEmpty => "Label format must not be empty".to_string(),
            Message::LabelFormatInvalid(format) => format!("Label format '{}' is not a valid date format", format),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Data exported successfully to: {}", path),
            Message::ExportNothing => "Nothing to export.".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_messages_include_values() {
        assert_eq!(Message::TaskCreated(3, "Read".into()).to_string(), "Task #3 \"Read\" created");
        assert_eq!(Message::CounterRecorded("2024-01-02".into(), 0).to_string(), "Recorded 0 for 2024-01-02");
    }
}
