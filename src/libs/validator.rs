//! Shape checks for raw strings collected by the shell.
//!
//! These checks are purely syntactic: a date only has to look like
//! `YYYY-MM-DD` (so `2024-13-99` passes), and an employee id only has to be
//! an integer. Whether the id refers to an existing row is decided by the
//! record store.

use super::error::{AttritionError, AttritionResult};
use regex::Regex;
use std::sync::OnceLock;

static DATE_SHAPE: OnceLock<Regex> = OnceLock::new();

fn date_shape() -> &'static Regex {
    // Anchored at the start only: trailing text after the date is accepted.
    DATE_SHAPE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("date shape pattern is valid"))
}

/// Returns `true` when `s` starts with four digits, a dash, two digits, a dash
/// and two digits.
pub fn validate_date(s: &str) -> bool {
    date_shape().is_match(s)
}

/// Parses an employee id typed by the user.
pub fn validate_employee_id_input(s: &str) -> AttritionResult<i64> {
    s.trim().parse::<i64>().map_err(|_| AttritionError::NotAnInteger(s.to_string()))
}
