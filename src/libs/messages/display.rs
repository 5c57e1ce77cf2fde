//! Display implementation for attrition application messages.
//!
//! All user-facing text lives here so that commands only deal with
//! structured `Message` values and never with literal strings.

use super::types::Message;
use crate::libs::period::Period;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "Choose an action:".to_string(),
            Message::MenuAddEmployee => "1. Add employee".to_string(),
            Message::MenuRecordTermination => "2. Record termination".to_string(),
            Message::MenuQuarterlyTerminations => "3. Get quarterly terminations".to_string(),
            Message::MenuYearlyTerminations => "4. Get yearly terminations".to_string(),
            Message::MenuAttritionByDepartment => "5. Get attrition by department".to_string(),
            Message::MenuAttritionByDesignation => "6. Get attrition by designation".to_string(),
            Message::MenuTopReasons => "7. Get top reasons for leaving".to_string(),
            Message::MenuExit => "8. Exit".to_string(),
            Message::InvalidChoice => "Invalid choice. Please try again.".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeAdded(id) => format!("Employee added successfully! (ID: {})", id),
            Message::EmployeesHeader => "Employees:".to_string(),
            Message::NoEmployeesFound => "No employees found.".to_string(),
            Message::TerminationRecorded => "Termination recorded successfully!".to_string(),

            // === ATTRITION MESSAGES ===
            Message::TerminationsCount(period, count) => match period {
                Period::Quarterly => format!("Quarterly terminations: {}", count),
                Period::Yearly => format!("Yearly terminations: {}", count),
            },
            Message::AttritionByDepartmentHeader => "Attrition by department:".to_string(),
            Message::AttritionByDesignationHeader => "Attrition by designation:".to_string(),
            Message::TopReasonsHeader => "Top reasons for leaving:".to_string(),
            Message::ReasonCount(reason, count) => format!("- {}: {}", reason, count),
            Message::NoTerminationsRecorded => "No terminations recorded yet.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::UsingDatabase(path) => format!("Using database at {}", path),

            // === PROMPTS ===
            Message::PromptMenuChoice => "Enter your choice".to_string(),
            Message::PromptEmployeeName => "Enter employee name".to_string(),
            Message::PromptDepartment => "Enter employee department".to_string(),
            Message::PromptDesignation => "Enter employee designation".to_string(),
            Message::PromptJoiningDate => "Enter employee joining date (YYYY-MM-DD)".to_string(),
            Message::PromptEmployeeId => "Enter employee ID to record termination".to_string(),
            Message::PromptTerminationDate => "Enter termination date (YYYY-MM-DD)".to_string(),
            Message::PromptReasonForLeaving => "Enter reason for leaving".to_string(),
            Message::PromptAnalysisPeriod(period) => format!("Enter analysis period ({})", period),
            Message::PromptDatabasePath => "Enter the database file path".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
        };
        write!(f, "{}", text)
    }
}
