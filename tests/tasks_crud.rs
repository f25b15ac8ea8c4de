#[cfg(test)]
mod tests {
    use kolecko::db::{db::Db, tasks::Tasks};
    use kolecko::libs::task::{Task, TaskDefaults, TaskModel};
    use test_context::{test_context, AsyncTestContext};

    struct TaskTestContext {
        model: TaskModel,
    }

    impl AsyncTestContext for TaskTestContext {
        async fn setup() -> Self {
            let db = Db::open_in_memory().unwrap();
            let defaults = TaskDefaults { priority: 2, icon: None };
            TaskTestContext {
                model: TaskModel::new(Tasks::new(db).await.unwrap(), defaults),
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_add_new_task_uses_defaults(ctx: &mut TaskTestContext) {
        let task = ctx.model.add_new_task("Read", "Chapter 3", None, None).await.unwrap();
        assert!(task.id.is_some());
        assert_eq!(task.priority, 2);
        assert_eq!(task.icon, None);

        let stored = ctx.model.get_all_tasks().await.unwrap();
        assert_eq!(stored, vec![task]);
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_add_new_task_with_explicit_fields(ctx: &mut TaskTestContext) {
        ctx.model.add_new_task("Run", "", Some(5), Some(12)).await.unwrap();

        let stored = ctx.model.get_all_tasks().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Run");
        assert_eq!(stored[0].priority, 5);
        assert_eq!(stored[0].icon, Some(12));
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_list_in_insertion_order(ctx: &mut TaskTestContext) {
        for i in 1..=3 {
            let task = Task::new(&format!("Task {}", i), "", &TaskDefaults::default());
            ctx.model.insert_task(&task).await.unwrap();
        }

        let titles: Vec<String> = ctx.model.get_all_tasks().await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Task 1", "Task 2", "Task 3"]);
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_remove_task(ctx: &mut TaskTestContext) {
        let keep = ctx.model.add_new_task("Keep", "", None, None).await.unwrap();
        let drop = ctx.model.add_new_task("Drop", "", None, None).await.unwrap();

        assert!(ctx.model.remove_task(&drop).await.unwrap());
        assert!(!ctx.model.remove_task(&drop).await.unwrap());

        let remaining = ctx.model.get_all_tasks().await.unwrap();
        assert_eq!(remaining, vec![keep]);
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_remove_unsaved_task(ctx: &mut TaskTestContext) {
        let task = Task::new("Never stored", "", &TaskDefaults::default());
        assert!(!ctx.model.remove_task(&task).await.unwrap());
    }
}
