#[cfg(test)]
mod tests {
    use attrition::db::db::Db;
    use attrition::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("attrition.db")
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, 2);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_employees_table_schema(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        let mut stmt = db.conn.prepare("SELECT name, type FROM pragma_table_info('employees') ORDER BY cid").unwrap();
        let columns: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let expected = [
            ("id", "INTEGER"),
            ("name", "TEXT"),
            ("department", "TEXT"),
            ("designation", "TEXT"),
            ("joining_date", "DATE"),
            ("termination_date", "DATE"),
            ("reason_for_leaving", "TEXT"),
        ];
        assert_eq!(columns.len(), expected.len());
        for ((name, kind), (expected_name, expected_kind)) in columns.iter().zip(expected) {
            assert_eq!(name, expected_name);
            assert_eq!(kind, expected_kind);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_employees_table", "add_attrition_indices"]);
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_version_read_errors_are_propagated(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(ctx.db_path()).unwrap();
        conn.execute("CREATE TABLE migrations (label TEXT)", []).unwrap();

        assert!(get_db_version(&conn).is_err());
        assert!(needs_migration(&conn).is_err());
        assert!(MigrationManager::new().run_migrations(&mut conn).is_err());

        let tables: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE name = 'employees'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tables, 0);
    }

    #[test]
    fn test_in_memory_database() {
        let db = Db::open_in_memory().unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        db.close().unwrap();
    }
}
