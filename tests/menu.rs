#[cfg(test)]
mod tests {
    use attrition::commands::menu::{run, Lines};
    use attrition::db::employees::Employees;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MenuTestContext {
        employees: Employees,
        _temp_dir: TempDir,
    }

    impl TestContext for MenuTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let employees = Employees::open(temp_dir.path().join("attrition.db")).unwrap();
            MenuTestContext {
                employees,
                _temp_dir: temp_dir,
            }
        }
    }

    impl MenuTestContext {
        fn run(&mut self, input: &str) {
            run(&mut self.employees, &mut Lines::new(input.as_bytes())).unwrap();
        }
    }

    #[test_context(MenuTestContext)]
    #[test]
    fn test_piped_session(ctx: &mut MenuTestContext) {
        let input = [
            // add an employee
            "1", "Ada", "Eng", "Engineer", "2020-01-15",
            // malformed joining date aborts only this action
            "1", "Bob", "Eng", "Engineer", "15/01/2020",
            // non-integer and unknown ids are asked again
            "2", "abc", "42", "1", "2024-05-01", "Relocation",
            // unsupported period, then the pre-filled default
            "3", "monthly",
            "4", "",
            "9",
            "5", "6", "7",
        ]
        .join("\n");
        ctx.run(&input);

        let all = ctx.employees.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ada");
        assert_eq!(all[0].termination_date.as_deref(), Some("2024-05-01"));
        assert_eq!(all[0].reason_for_leaving.as_deref(), Some("Relocation"));
    }

    #[test_context(MenuTestContext)]
    #[test]
    fn test_exit_stops_reading(ctx: &mut MenuTestContext) {
        ctx.run("8\n1\nEve\nEng\nEngineer\n2020-01-15\n");

        assert!(ctx.employees.list().unwrap().is_empty());
    }

    #[test_context(MenuTestContext)]
    #[test]
    fn test_end_of_input_exits(ctx: &mut MenuTestContext) {
        ctx.run("");
        // Input ending mid-action drops the unfinished action
        ctx.run("1\nAda\n");

        assert!(ctx.employees.list().unwrap().is_empty());
    }

    #[test_context(MenuTestContext)]
    #[test]
    fn test_empty_required_answer_is_asked_again(ctx: &mut MenuTestContext) {
        ctx.run("1\n\nAda\nEng\nEngineer\n2020-01-15\n8\n");

        let all = ctx.employees.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ada");
    }

    #[test_context(MenuTestContext)]
    #[test]
    fn test_termination_answers_may_be_empty(ctx: &mut MenuTestContext) {
        ctx.run("1\nAda\nEng\nEngineer\n2020-01-15\n2\n1\n\n\n8\n");

        let employee = ctx.employees.list().unwrap().remove(0);
        assert_eq!(employee.termination_date.as_deref(), Some(""));
        assert_eq!(employee.reason_for_leaving.as_deref(), Some(""));
    }
}
