#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tasked::db::error::DbError;
    use tasked::db::storage::{load, save};
    use tasked::libs::task::{Task, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("todo.json");
            StorageTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(1, "Buy milk"),
            Task::new(2, "Call mom").with_status(TaskStatus::InProgress),
            Task::new(5, "Ship release").with_status(TaskStatus::Done),
        ]
    }

    fn assert_invalid_file(result: Result<Vec<Task>, DbError>, expected_path: &PathBuf) {
        match result {
            Err(DbError::InvalidDatabaseFile { path, .. }) => assert_eq!(&path, expected_path),
            other => panic!("expected InvalidDatabaseFile, got {:?}", other),
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_missing_file_is_empty(ctx: &mut StorageTestContext) {
        assert!(load(&ctx.db_path).unwrap().is_empty());
        assert!(!ctx.db_path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_round_trip(ctx: &mut StorageTestContext) {
        let tasks = sample_tasks();
        save(&ctx.db_path, &tasks).unwrap();

        assert_eq!(load(&ctx.db_path).unwrap(), tasks);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_file_format(ctx: &mut StorageTestContext) {
        save(&ctx.db_path, &sample_tasks()[1..2]).unwrap();
        let contents = fs::read_to_string(&ctx.db_path).unwrap();

        assert!(contents.starts_with("[\n  {\n    \"id\": 2,\n    \"desc\": \"Call mom\",\n    \"status\": \"In Progress\",\n"));
        assert!(contents.contains("\n    \"createdAt\": \""));
        assert!(contents.contains("\n    \"updatedAt\": \""));
        assert!(contents.ends_with("}\n]\n"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_keeps_order(ctx: &mut StorageTestContext) {
        let mut tasks = sample_tasks();
        tasks.reverse();
        save(&ctx.db_path, &tasks).unwrap();

        let ids: Vec<u32> = load(&ctx.db_path).unwrap().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![5, 2, 1]);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_creates_parent_directories(ctx: &mut StorageTestContext) {
        let nested = ctx.db_path.parent().unwrap().join("a").join("b").join("todo.json");
        save(&nested, &sample_tasks()).unwrap();

        assert_eq!(load(&nested).unwrap().len(), 3);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_empty_collection(ctx: &mut StorageTestContext) {
        save(&ctx.db_path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&ctx.db_path).unwrap(), "[]\n");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_null_and_empty_array_are_empty(ctx: &mut StorageTestContext) {
        fs::write(&ctx.db_path, "null").unwrap();
        assert!(load(&ctx.db_path).unwrap().is_empty());

        fs::write(&ctx.db_path, "[]").unwrap();
        assert!(load(&ctx.db_path).unwrap().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_invalid_json_is_rejected(ctx: &mut StorageTestContext) {
        fs::write(&ctx.db_path, "[{\"id\": 1,").unwrap();
        assert_invalid_file(load(&ctx.db_path), &ctx.db_path);

        // The broken file is left as it was
        assert_eq!(fs::read_to_string(&ctx.db_path).unwrap(), "[{\"id\": 1,");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_non_array_is_rejected(ctx: &mut StorageTestContext) {
        fs::write(&ctx.db_path, "{\"tasks\": []}").unwrap();
        assert_invalid_file(load(&ctx.db_path), &ctx.db_path);

        fs::write(&ctx.db_path, "\"todo\"").unwrap();
        assert_invalid_file(load(&ctx.db_path), &ctx.db_path);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_bad_record_is_rejected(ctx: &mut StorageTestContext) {
        let json = r#"[
            {"id": 1, "desc": "ok", "status": "Todo", "createdAt": "2025-01-01T10:00:00+00:00", "updatedAt": "2025-01-01T10:00:00+00:00"},
            {"id": 2, "desc": "bad", "status": "Blocked", "createdAt": "2025-01-01T10:00:00+00:00", "updatedAt": "2025-01-01T10:00:00+00:00"}
        ]"#;
        fs::write(&ctx.db_path, json).unwrap();

        let message = format!("{:#}", anyhow::Error::from(load(&ctx.db_path).unwrap_err()));
        assert_eq!(message.matches("record #1").count(), 1, "{}", message);
        assert_invalid_file(load(&ctx.db_path), &ctx.db_path);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_error_chain_names_cause_once(ctx: &mut StorageTestContext) {
        fs::write(&ctx.db_path, "[{").unwrap();
        let message = format!("{:#}", anyhow::Error::from(load(&ctx.db_path).unwrap_err()));
        assert!(message.starts_with("Invalid database file "), "{}", message);
        assert_eq!(message.matches("EOF while parsing").count(), 1, "{}", message);

        // A regular file where the parent directory should be
        let blocker = ctx.db_path.with_file_name("blocker");
        fs::write(&blocker, "").unwrap();
        let target = blocker.join("todo.json");
        let error = save(&target, &sample_tasks()).unwrap_err();
        assert!(matches!(error, DbError::PersistenceFailure { .. }));

        let message = format!("{:#}", anyhow::Error::from(error));
        let cause = message
            .strip_prefix(&format!("Failed to write database file {}: ", target.display()))
            .unwrap_or_else(|| panic!("unexpected message: {}", message));
        assert!(!cause.is_empty());
        assert!(!cause.contains(": "), "cause repeated: {}", message);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_duplicate_ids_are_rejected(ctx: &mut StorageTestContext) {
        let json = r#"[
            {"id": 3, "desc": "a", "status": "Todo", "createdAt": "2025-01-01T10:00:00+00:00", "updatedAt": "2025-01-01T10:00:00+00:00"},
            {"id": 3, "desc": "b", "status": "Done", "createdAt": "2025-01-01T10:00:00+00:00", "updatedAt": "2025-01-01T10:00:00+00:00"}
        ]"#;
        fs::write(&ctx.db_path, json).unwrap();

        assert_invalid_file(load(&ctx.db_path), &ctx.db_path);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_loads_offset_less_timestamps(ctx: &mut StorageTestContext) {
        let json = r#"[
          {
            "id": 1,
            "desc": "legacy",
            "status": "In Progress",
            "createdAt": "2024-06-01T09:15:00.123456",
            "updatedAt": "2024-06-02T18:00:00"
          }
        ]"#;
        fs::write(&ctx.db_path, json).unwrap();

        let tasks = load(&ctx.db_path).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
        assert!(tasks[0].updated_at > tasks[0].created_at);
    }
}
