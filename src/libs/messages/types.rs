#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64, String), // id, title
    TasksHeader,
    NoTasks,
    NoTaskIdsProvided,
    TaskNotFoundWithId(i64),
    TasksDeletedCount(usize),
    ConfirmDeleteTasks(usize),

    // === STATISTICS MESSAGES ===
    StatsHeader(String),          // date
    StatsEmpty,
    CounterRecorded(String, u32), // date, persisted value
    CounterToday(String, u32),    // date, in-memory counter
    WatchStarted,
    WatchStopped,
    InvalidDate(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    PromptLabelFormat,
    PromptDefaultPriority,
    LabelFormatEmpty,
    LabelFormatInvalid(String),

    // === EXPORT MESSAGES ===
    ExportSuccess(String), // path
    ExportNothing,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
