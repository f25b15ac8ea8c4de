use crate::db::tasks::Tasks;
use crate::libs::error::AppResult;
use serde::{Deserialize, Serialize};

/// A task record. `id` is `None` until the task has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub icon: Option<i32>,
}

impl Task {
    pub fn new(title: &str, description: &str, defaults: &TaskDefaults) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            priority: defaults.priority,
            icon: defaults.icon,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_icon(mut self, icon: i32) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Values used for the optional task attributes when the caller leaves them out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefaults {
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub icon: Option<i32>,
}

/// Task operations used by the shell, with attribute defaults applied.
#[derive(Clone)]
pub struct TaskModel {
    tasks: Tasks,
    defaults: TaskDefaults,
}

impl TaskModel {
    pub fn new(tasks: Tasks, defaults: TaskDefaults) -> Self {
        TaskModel { tasks, defaults }
    }

    pub async fn get_all_tasks(&self) -> AppResult<Vec<Task>> {
        self.tasks.fetch_all().await
    }

    pub async fn insert_task(&self, task: &Task) -> AppResult<i64> {
        self.tasks.insert(task).await
    }

    /// Removes `task` by its identity. Returns `false` for a task that was
    /// never stored or is already gone.
    pub async fn remove_task(&self, task: &Task) -> AppResult<bool> {
        match task.id {
            Some(id) => Ok(self.tasks.delete(id).await? > 0),
            None => Ok(false),
        }
    }

    /// Builds a task from the given fields, filling the missing ones from the
    /// configured defaults, and stores it.
    pub async fn add_new_task(
        &self,
        title: &str,
        description: &str,
        priority: Option<i32>,
        icon: Option<i32>,
    ) -> AppResult<Task> {
        let mut task = Task::new(title, description, &self.defaults);
        if let Some(priority) = priority {
            task = task.with_priority(priority);
        }
        if let Some(icon) = icon {
            task = task.with_icon(icon);
        }
        task.id = Some(self.insert_task(&task).await?);
        Ok(task)
    }
}
