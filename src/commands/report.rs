//! Attrition reports shared by the menu and the one-shot subcommands.

use crate::{
    db::employees::Employees,
    libs::{messages::Message, period::Period, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Analysis period: quarterly or yearly
    #[arg(default_value = "quarterly")]
    pub period: String,
}

pub fn count(employees: &Employees, period: &str) -> Result<()> {
    let period: Period = period.parse()?;
    let count = employees.attrition().count_terminations_as_of(period, Local::now().date_naive())?;

    msg_print!(Message::TerminationsCount(period, count));
    Ok(())
}

pub fn departments(employees: &Employees) -> Result<()> {
    let departments = employees.attrition().attrition_by_department()?;

    if departments.is_empty() {
        msg_info!(Message::NoTerminationsRecorded);
        return Ok(());
    }

    msg_print!(Message::AttritionByDepartmentHeader);
    View::departments(&departments);
    Ok(())
}

pub fn designations(employees: &Employees) -> Result<()> {
    let designations = employees.attrition().attrition_by_designation()?;

    if designations.is_empty() {
        msg_info!(Message::NoTerminationsRecorded);
        return Ok(());
    }

    msg_print!(Message::AttritionByDesignationHeader);
    View::designations(&designations);
    Ok(())
}

pub fn reasons(employees: &Employees) -> Result<()> {
    match reason_lines(employees.attrition().top_reasons_for_leaving()?) {
        Some(lines) => {
            for line in lines {
                msg_print!(line);
            }
        }
        None => msg_info!(Message::NoTerminationsRecorded),
    }
    Ok(())
}

/// Header plus one line per reason, or `None` when nobody has left.
fn reason_lines(reasons: Vec<(String, i64)>) -> Option<Vec<Message>> {
    if reasons.is_empty() {
        return None;
    }

    let lines = std::iter::once(Message::TopReasonsHeader)
        .chain(reasons.into_iter().map(|(reason, count)| Message::ReasonCount(reason, count)))
        .collect();
    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_lines_empty() {
        assert!(reason_lines(Vec::new()).is_none());
    }

    #[test]
    fn test_reason_lines() {
        let lines: Vec<String> = reason_lines(vec![("Burnout".to_string(), 2), ("Relocation".to_string(), 4)])
            .unwrap()
            .iter()
            .map(|line| line.to_string())
            .collect();

        assert_eq!(lines, vec!["Top reasons for leaving:", "- Burnout: 2", "- Relocation: 4"]);
    }
}
