#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kolecko::db::db::{Db, SCHEMA_VERSION};
    use kolecko::db::{day_counters::DayCounters, tasks::Tasks};
    use kolecko::libs::task::{Task, TaskDefaults};
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl AsyncTestContext for StoreTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("nested").join("kolecko.db");
            StoreTestContext { _temp_dir: temp_dir, path }
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_data_survives_reopen(ctx: &mut StoreTestContext) {
        {
            let counters = DayCounters::new(Db::open(&ctx.path).unwrap(), "%d.%m.").await.unwrap();
            counters.insert_or_update(day(), 8).await.unwrap();
        }

        let counters = DayCounters::new(Db::open(&ctx.path).unwrap(), "%d.%m.").await.unwrap();
        assert_eq!(counters.get_by_date(day()).await.unwrap().unwrap().value, 8);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_store_recreated_on_layout_change(ctx: &mut StoreTestContext) {
        {
            let db = Db::open(&ctx.path).unwrap();
            let counters = DayCounters::new(db.clone(), "%d.%m.").await.unwrap();
            counters.insert_or_update(day(), 8).await.unwrap();
            let tasks = Tasks::new(db).await.unwrap();
            tasks.insert(&Task::new("Old", "", &TaskDefaults::default())).await.unwrap();
        }
        {
            let conn = Connection::open(&ctx.path).unwrap();
            conn.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION + 1)).unwrap();
        }

        let db = Db::open(&ctx.path).unwrap();
        let counters = DayCounters::new(db.clone(), "%d.%m.").await.unwrap();
        let tasks = Tasks::new(db).await.unwrap();
        assert!(counters.get_all().await.unwrap().is_empty());
        assert!(tasks.fetch_all().await.unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_current_layout_is_kept(ctx: &mut StoreTestContext) {
        {
            let counters = DayCounters::new(Db::open(&ctx.path).unwrap(), "%d.%m.").await.unwrap();
            counters.insert_or_update(day(), 1).await.unwrap();
        }

        let conn = Connection::open(&ctx.path).unwrap();
        let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0)).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_repositories_create_their_tables(ctx: &mut StoreTestContext) {
        let db = Db::open(&ctx.path).unwrap();
        DayCounters::new(db.clone(), "%d.%m.").await.unwrap();
        Tasks::new(db).await.unwrap();

        let conn = Connection::open(&ctx.path).unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(tables, vec!["data_entities", "tasks"]);
    }
}
