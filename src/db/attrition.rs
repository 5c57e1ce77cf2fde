//! Read-only attrition queries over the `employees` table.
//!
//! An employee counts as attrition once a termination date has been
//! recorded. Every query runs as a single SQL statement, so each result
//! reflects one consistent snapshot of the table.
//!
//! ## Ordering
//!
//! - department counts are ordered alphabetically by department
//! - designation counts are returned as a `BTreeMap`, alphabetical by key
//! - top reasons are selected by count (ties broken alphabetically) and then
//!   ordered alphabetically by reason
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attrition::db::employees::Employees;
//!
//! let employees = Employees::new()?;
//! let attrition = employees.attrition();
//! let quarterly = attrition.count_terminations("quarterly")?;
//! for (reason, count) in attrition.top_reasons_for_leaving()? {
//!     println!("- {}: {}", reason, count);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::error::AttritionResult;
use crate::libs::period::Period;
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection};
use std::collections::BTreeMap;

/// Maximum number of entries returned by [`Attrition::top_reasons_for_leaving`].
pub const TOP_REASONS_LIMIT: usize = 5;

const COUNT_TERMINATIONS_SINCE: &str = "SELECT COUNT(*) FROM employees WHERE termination_date >= ?1";
const ATTRITION_BY_DEPARTMENT: &str = "
    SELECT department, COUNT(*) AS terminations FROM employees
    WHERE termination_date IS NOT NULL
    GROUP BY department
    ORDER BY department
";
const ATTRITION_BY_DESIGNATION: &str = "
    SELECT designation, COUNT(*) AS terminations FROM employees
    WHERE termination_date IS NOT NULL
    GROUP BY designation
";
const TOP_REASONS_FOR_LEAVING: &str = "
    SELECT reason_for_leaving, COUNT(*) AS count FROM employees
    WHERE reason_for_leaving IS NOT NULL
    GROUP BY reason_for_leaving
    ORDER BY count DESC, reason_for_leaving ASC
    LIMIT ?1
";

pub struct Attrition<'a> {
    conn: &'a Connection,
}

impl<'a> Attrition<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Counts terminations inside the rolling `period` window ending today.
    ///
    /// `period` must be `quarterly` or `yearly`.
    pub fn count_terminations(&self, period: &str) -> AttritionResult<i64> {
        let period: Period = period.parse()?;
        self.count_terminations_as_of(period, Local::now().date_naive())
    }

    /// Counts rows whose termination date is on or after `period.window_start(today)`.
    ///
    /// Dates are compared as text, the same way they are stored.
    pub fn count_terminations_as_of(&self, period: Period, today: NaiveDate) -> AttritionResult<i64> {
        let start = period.window_start(today);
        let count: i64 = self.conn.query_row(COUNT_TERMINATIONS_SINCE, params![start], |row| row.get(0))?;
        tracing::debug!(%period, %start, count, "terminations counted");

        Ok(count)
    }

    /// `(department, terminations)` pairs for departments with at least one termination.
    pub fn attrition_by_department(&self) -> AttritionResult<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(ATTRITION_BY_DEPARTMENT)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

        let mut departments = Vec::new();
        for row in rows {
            departments.push(row?);
        }
        Ok(departments)
    }

    pub fn attrition_by_designation(&self) -> AttritionResult<BTreeMap<String, i64>> {
        let mut stmt = self.conn.prepare(ATTRITION_BY_DESIGNATION)?;
        let designations = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(designations)
    }

    /// The five most frequent reasons for leaving, ordered by reason text.
    ///
    /// Count only decides which reasons make the cut; the returned order is
    /// alphabetical.
    pub fn top_reasons_for_leaving(&self) -> AttritionResult<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(TOP_REASONS_FOR_LEAVING)?;
        let rows = stmt.query_map(params![TOP_REASONS_LIMIT as i64], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

        let mut reasons = Vec::new();
        for row in rows {
            reasons.push(row?);
        }
        reasons.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(reasons)
    }
}
