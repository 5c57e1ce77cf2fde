//! Record store for employee rows.
//!
//! `Employees` exclusively owns the connection for the process lifetime:
//! the shell opens it once, hands out read-only `Attrition` views for
//! queries and calls [`Employees::close`] on the way out.

use super::attrition::Attrition;
use super::db::Db;
use crate::libs::employee::{Employee, NewEmployee};
use crate::libs::error::{AttritionError, AttritionResult};
use crate::libs::validator::validate_date;
use anyhow::Result;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, department, designation, joining_date) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TERMINATION: &str = "UPDATE employees SET termination_date = ?2, reason_for_leaving = ?3 WHERE id = ?1";
const SELECT_EMPLOYEE_BY_ID: &str = "SELECT id, name, department, designation, joining_date, termination_date, reason_for_leaving FROM employees WHERE id = ?1";
const SELECT_ALL_EMPLOYEES: &str = "SELECT id, name, department, designation, joining_date, termination_date, reason_for_leaving FROM employees ORDER BY id";
const EMPLOYEE_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?1)";

pub struct Employees {
    conn: Connection,
}

impl Employees {
    /// Opens the store at the configured database location.
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }

    /// Read-only query view over the current table.
    pub fn attrition(&self) -> Attrition<'_> {
        Attrition::new(&self.conn)
    }

    /// Inserts a new employee and returns the id assigned by SQLite.
    ///
    /// The joining date must have the `YYYY-MM-DD` shape; otherwise nothing
    /// is written and `InvalidDateFormat` is returned.
    pub fn create(&mut self, employee: &NewEmployee) -> AttritionResult<i64> {
        if !validate_date(&employee.joining_date) {
            return Err(AttritionError::InvalidDateFormat(employee.joining_date.clone()));
        }

        self.conn.execute(
            INSERT_EMPLOYEE,
            params![employee.name, employee.department, employee.designation, employee.joining_date],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, department = %employee.department, "employee created");

        Ok(id)
    }

    /// Sets the termination date and reason for an employee.
    ///
    /// Calling it again for the same id overwrites both fields. Neither the
    /// date nor the reason is validated.
    pub fn record_termination(&mut self, id: i64, termination_date: &str, reason: &str) -> AttritionResult<()> {
        let affected = self.conn.execute(UPDATE_TERMINATION, params![id, termination_date, reason])?;
        if affected == 0 {
            return Err(AttritionError::UnknownEmployeeId(id));
        }
        tracing::debug!(id, termination_date, "termination recorded");

        Ok(())
    }

    pub fn exists(&self, id: i64) -> AttritionResult<bool> {
        let exists: bool = self.conn.query_row(EMPLOYEE_EXISTS, params![id], |row| row.get(0))?;
        Ok(exists)
    }

    /// Get an employee by ID
    pub fn fetch(&self, id: i64) -> AttritionResult<Option<Employee>> {
        self.conn
            .query_row(SELECT_EMPLOYEE_BY_ID, params![id], employee_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Get all employees ordered by ID
    pub fn list(&self) -> AttritionResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_EMPLOYEES)?;
        let employee_iter = stmt.query_map([], employee_from_row)?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    /// Releases the database handle.
    pub fn close(self) -> Result<()> {
        Db { conn: self.conn }.close()
    }
}

fn employee_from_row(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        designation: row.get(3)?,
        joining_date: date_column(row, 4)?.unwrap_or_default(),
        termination_date: date_column(row, 5)?,
        reason_for_leaving: row.get(6)?,
    })
}

// DATE columns have numeric affinity, so text such as "2024" comes back as an
// integer. Dates are read back as whatever text they represent.
fn date_column(row: &Row, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}
