use super::employee::Employee;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "DESIGNATION", "JOINED", "TERMINATED", "REASON"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.name,
                employee.department,
                employee.designation,
                employee.joining_date,
                employee.termination_date.as_deref().unwrap_or("-"),
                employee.reason_for_leaving.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();
    }

    pub fn departments(departments: &[(String, i64)]) {
        let mut table = Table::new();

        table.add_row(row!["DEPARTMENT", "TERMINATIONS"]);
        for (department, count) in departments {
            table.add_row(row![department, count]);
        }
        table.printstd();
    }

    pub fn designations(designations: &BTreeMap<String, i64>) {
        let mut table = Table::new();

        table.add_row(row!["DESIGNATION", "TERMINATIONS"]);
        for (designation, count) in designations {
            table.add_row(row![designation, count]);
        }
        table.printstd();
    }
}
