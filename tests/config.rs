#[cfg(test)]
mod tests {
    use kolecko::libs::config::Config;
    use kolecko::libs::error::AppError;
    use kolecko::libs::task::TaskDefaults;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("config.json");
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.label_format, "%d.%m.");
        assert_eq!(config.tasks, TaskDefaults::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            label_format: "%d/%m".to_string(),
            tasks: TaskDefaults { priority: 3, icon: Some(1) },
            db_file: Some("other.db".to_string()),
        };
        config.save_to(&ctx.path).unwrap();

        assert_eq!(Config::read_from(&ctx.path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_uses_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.path, r#"{ "tasks": { "priority": 7 } }"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.label_format, "%d.%m.");
        assert_eq!(config.tasks.priority, 7);
        assert_eq!(config.tasks.icon, None);
        assert_eq!(config.db_file, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_label_format_rejected(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.path, r#"{ "label_format": "%d.%" }"#).unwrap();
        assert!(matches!(Config::read_from(&ctx.path), Err(AppError::Config(_))));

        let config = Config {
            label_format: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.save_to(&ctx.path), Err(AppError::Config(_))));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_json_is_config_error(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.path, "{ not json").unwrap();
        assert!(matches!(Config::read_from(&ctx.path), Err(AppError::Config(_))));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_time_label_format_rejected(ctx: &mut ConfigTestContext) {
        for format in ["%H:%M", "%d.%m. %z"] {
            let config = Config {
                label_format: format.to_string(),
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(AppError::Config(_))), "{format}");
        }

        std::fs::write(&ctx.path, r#"{ "label_format": "%H:%M" }"#).unwrap();
        assert!(matches!(Config::read_from(&ctx.path), Err(AppError::Config(_))));
    }
}
