//! Interactive eight-item menu.
//!
//! The menu only collects raw input and dispatches to the record store and
//! the reports. Field-level failures (a malformed joining date, an unknown
//! period) abort the current action and return to the menu; the employee
//! id prompt keeps asking until it gets an existing id.
//!
//! Answers come from dialoguer prompts on a terminal, or line by line from
//! stdin when input is piped. End of input ends the session like option 8.

use super::report;
use crate::{
    db::employees::Employees,
    libs::{
        employee::NewEmployee,
        error::AttritionError,
        messages::Message,
        period::Period,
        validator::validate_employee_id_input,
    },
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

/// Raised by an [`Answers`] source once it has nothing more to read.
#[derive(Debug, Error)]
#[error("end of input")]
pub struct EndOfInput;

/// A single prompt shown to the user.
#[derive(Debug, Clone)]
pub struct Question {
    message: Message,
    default: Option<String>,
    allow_empty: bool,
}

impl Question {
    /// Re-asked until the answer is not empty.
    pub fn required(message: Message) -> Self {
        Question {
            message,
            default: None,
            allow_empty: false,
        }
    }

    pub fn optional(message: Message) -> Self {
        Question {
            message,
            default: None,
            allow_empty: true,
        }
    }

    /// An empty answer yields `default`.
    pub fn with_default(message: Message, default: String) -> Self {
        Question {
            message,
            default: Some(default),
            allow_empty: false,
        }
    }
}

/// Source of the user's answers.
pub trait Answers {
    /// Returns the answer, or an [`EndOfInput`] error when input is exhausted.
    fn ask(&mut self, question: &Question) -> Result<String>;
}

/// Themed dialoguer prompts.
pub struct Terminal;

impl Answers for Terminal {
    fn ask(&mut self, question: &Question) -> Result<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(question.message.to_string())
            .allow_empty(question.allow_empty);
        if let Some(default) = &question.default {
            input = input.default(default.clone());
        }

        Ok(input.interact_text()?)
    }
}

/// Plain line-based answers, used when stdin is not a terminal.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Lines { reader }
    }
}

impl<R: BufRead> Answers for Lines<R> {
    fn ask(&mut self, question: &Question) -> Result<String> {
        loop {
            print!("{}: ", question.message);
            io::stdout().flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                println!();
                return Err(EndOfInput.into());
            }

            let answer = line.trim_end_matches(['\r', '\n']);
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            if let Some(default) = &question.default {
                return Ok(default.clone());
            }
            if question.allow_empty {
                return Ok(String::new());
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddEmployee,
    RecordTermination,
    QuarterlyTerminations,
    YearlyTerminations,
    AttritionByDepartment,
    AttritionByDesignation,
    TopReasons,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 8] = [
        MenuChoice::AddEmployee,
        MenuChoice::RecordTermination,
        MenuChoice::QuarterlyTerminations,
        MenuChoice::YearlyTerminations,
        MenuChoice::AttritionByDepartment,
        MenuChoice::AttritionByDesignation,
        MenuChoice::TopReasons,
        MenuChoice::Exit,
    ];

    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddEmployee),
            "2" => Some(MenuChoice::RecordTermination),
            "3" => Some(MenuChoice::QuarterlyTerminations),
            "4" => Some(MenuChoice::YearlyTerminations),
            "5" => Some(MenuChoice::AttritionByDepartment),
            "6" => Some(MenuChoice::AttritionByDesignation),
            "7" => Some(MenuChoice::TopReasons),
            "8" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    fn label(&self) -> Message {
        match self {
            MenuChoice::AddEmployee => Message::MenuAddEmployee,
            MenuChoice::RecordTermination => Message::MenuRecordTermination,
            MenuChoice::QuarterlyTerminations => Message::MenuQuarterlyTerminations,
            MenuChoice::YearlyTerminations => Message::MenuYearlyTerminations,
            MenuChoice::AttritionByDepartment => Message::MenuAttritionByDepartment,
            MenuChoice::AttritionByDesignation => Message::MenuAttritionByDesignation,
            MenuChoice::TopReasons => Message::MenuTopReasons,
            MenuChoice::Exit => Message::MenuExit,
        }
    }
}

pub fn cmd(employees: &mut Employees) -> Result<()> {
    if io::stdin().is_terminal() && console::user_attended_stderr() {
        run(employees, &mut Terminal)
    } else {
        run(employees, &mut Lines::new(io::stdin().lock()))
    }
}

/// Runs the menu until option 8 or the end of `answers`.
pub fn run(employees: &mut Employees, answers: &mut impl Answers) -> Result<()> {
    loop {
        print_menu();

        let input = match answers.ask(&Question::required(Message::PromptMenuChoice)) {
            Ok(input) => input,
            Err(e) if e.is::<EndOfInput>() => break,
            Err(e) => return Err(e),
        };
        let choice = match MenuChoice::parse(&input) {
            Some(MenuChoice::Exit) => break,
            Some(choice) => choice,
            None => {
                msg_error!(Message::InvalidChoice);
                continue;
            }
        };

        match dispatch(employees, answers, choice) {
            Ok(()) => {}
            Err(e) if e.is::<EndOfInput>() => break,
            Err(e) if is_recoverable(&e) => msg_error!(e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Domain failures abort only the current action; database and terminal
/// failures end the session.
fn is_recoverable(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<AttritionError>(),
        Some(e) if !matches!(e, AttritionError::Database(_))
    )
}

fn print_menu() {
    msg_print!(Message::MenuTitle, true);
    for choice in MenuChoice::ALL {
        msg_print!(choice.label());
    }
}

fn dispatch(employees: &mut Employees, answers: &mut impl Answers, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::AddEmployee => add_employee(employees, answers),
        MenuChoice::RecordTermination => record_termination(employees, answers),
        MenuChoice::QuarterlyTerminations => terminations(employees, answers, Period::Quarterly),
        MenuChoice::YearlyTerminations => terminations(employees, answers, Period::Yearly),
        MenuChoice::AttritionByDepartment => report::departments(employees),
        MenuChoice::AttritionByDesignation => report::designations(employees),
        MenuChoice::TopReasons => report::reasons(employees),
        MenuChoice::Exit => Ok(()),
    }
}

fn add_employee(employees: &mut Employees, answers: &mut impl Answers) -> Result<()> {
    let name = answers.ask(&Question::required(Message::PromptEmployeeName))?;
    let department = answers.ask(&Question::required(Message::PromptDepartment))?;
    let designation = answers.ask(&Question::required(Message::PromptDesignation))?;
    let joining_date = answers.ask(&Question::required(Message::PromptJoiningDate))?;

    let id = employees.create(&NewEmployee::new(&name, &department, &designation, &joining_date))?;

    msg_success!(Message::EmployeeAdded(id));
    Ok(())
}

fn record_termination(employees: &mut Employees, answers: &mut impl Answers) -> Result<()> {
    let id = ask_existing_employee_id(employees, answers)?;
    let termination_date = answers.ask(&Question::optional(Message::PromptTerminationDate))?;
    let reason = answers.ask(&Question::optional(Message::PromptReasonForLeaving))?;

    employees.record_termination(id, &termination_date, &reason)?;

    msg_success!(Message::TerminationRecorded);
    Ok(())
}

/// Asks for the analysis period, pre-filled with `suggested`.
fn terminations(employees: &Employees, answers: &mut impl Answers, suggested: Period) -> Result<()> {
    let period = answers.ask(&Question::with_default(
        Message::PromptAnalysisPeriod(suggested),
        suggested.to_string(),
    ))?;

    report::count(employees, &period)
}

fn ask_existing_employee_id(employees: &Employees, answers: &mut impl Answers) -> Result<i64> {
    loop {
        let input = answers.ask(&Question::required(Message::PromptEmployeeId))?;
        match validate_employee_id_input(&input) {
            Ok(id) if employees.exists(id)? => return Ok(id),
            Ok(id) => msg_error!(AttritionError::UnknownEmployeeId(id)),
            Err(error) => msg_error!(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddEmployee));
        assert_eq!(MenuChoice::parse(" 8 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_domain_errors_are_recoverable() {
        let errors = [
            AttritionError::InvalidDateFormat("15/01/2024".to_string()),
            AttritionError::UnknownEmployeeId(42),
            AttritionError::NotAnInteger("abc".to_string()),
            AttritionError::UnsupportedPeriod("monthly".to_string()),
        ];
        for error in errors {
            let error = anyhow::Error::from(error);
            assert!(is_recoverable(&error), "{}", error);
        }
    }

    #[test]
    fn test_database_errors_end_the_session() {
        let error = anyhow::Error::from(AttritionError::Database(rusqlite::Error::QueryReturnedNoRows));
        assert!(!is_recoverable(&error));

        let error = anyhow::Error::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(!is_recoverable(&error));
    }

    #[test]
    fn test_terminal_errors_end_the_session() {
        let error = anyhow::Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"));
        assert!(!is_recoverable(&error));
    }

    #[test]
    fn test_lines_answers() {
        let mut answers = Lines::new("\n\nAda\r\n\n\n".as_bytes());

        assert_eq!(answers.ask(&Question::required(Message::PromptEmployeeName)).unwrap(), "Ada");
        assert_eq!(answers.ask(&Question::optional(Message::PromptReasonForLeaving)).unwrap(), "");
        let period = Question::with_default(Message::PromptAnalysisPeriod(Period::Yearly), "yearly".to_string());
        assert_eq!(answers.ask(&period).unwrap(), "yearly");
        assert!(answers.ask(&Question::optional(Message::PromptTerminationDate)).unwrap_err().is::<EndOfInput>());
    }

    #[test]
    fn test_menu_labels_are_numbered_in_order() {
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            let label = choice.label().to_string();
            assert!(label.starts_with(&format!("{}. ", index + 1)), "{}", label);
            assert_eq!(MenuChoice::parse(&(index + 1).to_string()), Some(*choice));
        }
    }
}
