use crate::{
    db::employees::Employees,
    libs::{
        employee::NewEmployee, error::AttritionError, messages::Message, validator::validate_employee_id_input,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Employee name
    #[arg(long)]
    name: String,
    /// Department the employee works in
    #[arg(long)]
    department: String,
    /// Job title
    #[arg(long)]
    designation: String,
    /// Joining date (YYYY-MM-DD)
    #[arg(long)]
    joining_date: String,
}

#[derive(Debug, Args)]
pub struct TerminateArgs {
    /// Employee ID
    id: String,
    /// Termination date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Reason for leaving
    #[arg(long)]
    reason: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Employee ID
    id: String,
}

pub fn add(employees: &mut Employees, args: AddArgs) -> Result<()> {
    let employee = NewEmployee::new(&args.name, &args.department, &args.designation, &args.joining_date);
    let id = employees.create(&employee)?;

    msg_success!(Message::EmployeeAdded(id));
    Ok(())
}

pub fn terminate(employees: &mut Employees, args: TerminateArgs) -> Result<()> {
    let id = validate_employee_id_input(&args.id)?;
    employees.record_termination(id, &args.date, &args.reason)?;

    msg_success!(Message::TerminationRecorded);
    Ok(())
}

pub fn show(employees: &Employees, args: ShowArgs) -> Result<()> {
    let id = validate_employee_id_input(&args.id)?;

    let employee = employees.fetch(id)?.ok_or(AttritionError::UnknownEmployeeId(id))?;

    View::employees(&[employee]);
    Ok(())
}

pub fn list(employees: &Employees) -> Result<()> {
    let all = employees.list()?;

    if all.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    msg_print!(Message::EmployeesHeader, true);
    View::employees(&all);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (Employees, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let employees = Employees::open(temp_dir.path().join("attrition.db")).unwrap();
        (employees, temp_dir)
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let (employees, _temp_dir) = store();

        let error = show(&employees, ShowArgs { id: "41".to_string() }).unwrap_err();
        assert!(matches!(error.downcast_ref::<AttritionError>(), Some(AttritionError::UnknownEmployeeId(41))));
    }

    #[test]
    fn test_show_rejects_non_integer_id() {
        let (employees, _temp_dir) = store();

        let error = show(&employees, ShowArgs { id: "abc".to_string() }).unwrap_err();
        assert!(matches!(error.downcast_ref::<AttritionError>(), Some(AttritionError::NotAnInteger(_))));
    }

    #[test]
    fn test_show_existing_employee() {
        let (mut employees, _temp_dir) = store();
        let id = employees.create(&NewEmployee::new("Ada", "Eng", "Engineer", "2020-01-15")).unwrap();

        assert!(show(&employees, ShowArgs { id: id.to_string() }).is_ok());
    }
}
