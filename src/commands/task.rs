use super::open_store;
use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskModel, view::View},
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Priority, the configured default when omitted
        #[arg(short, long)]
        priority: Option<i32>,
        /// Icon reference
        #[arg(short, long)]
        icon: Option<i32>,
    },
    /// List all tasks
    List,
    /// Delete tasks by ID
    Delete {
        /// IDs of the tasks to delete
        ids: Vec<i64>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    let (config, db) = open_store()?;
    let model = TaskModel::new(Tasks::new(db).await?, config.tasks);

    match args.command {
        TaskCommand::Add {
            title,
            description,
            priority,
            icon,
        } => {
            let task = model.add_new_task(&title, &description, priority, icon).await?;
            msg_success!(Message::TaskCreated(task.id.unwrap_or(0), task.title));
        }
        TaskCommand::List => {
            let tasks = model.get_all_tasks().await?;
            if tasks.is_empty() {
                msg_info!(Message::NoTasks);
            } else {
                msg_print!(Message::TasksHeader, true);
                View::tasks(&tasks);
            }
        }
        TaskCommand::Delete { ids, yes } => handle_delete(&model, ids, yes).await?,
    }

    Ok(())
}

async fn handle_delete(model: &TaskModel, ids: Vec<i64>, yes: bool) -> Result<()> {
    if ids.is_empty() {
        msg_bail_anyhow!(Message::NoTaskIdsProvided);
    }

    let tasks = model.get_all_tasks().await?;
    let mut selected = Vec::new();
    for id in ids {
        match tasks.iter().find(|task| task.id == Some(id)) {
            Some(task) => selected.push(task.clone()),
            None => msg_error!(Message::TaskNotFoundWithId(id)),
        }
    }
    if selected.is_empty() {
        return Ok(());
    }

    View::tasks(&selected);
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTasks(selected.len()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut deleted = 0;
    for task in &selected {
        if model.remove_task(task).await? {
            deleted += 1;
        }
    }
    msg_success!(Message::TasksDeletedCount(deleted));
    Ok(())
}
