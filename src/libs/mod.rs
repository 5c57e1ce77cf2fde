//! Core library modules for the attrition application.
//!
//! Everything that is not SQL lives here: the employee model, input
//! validation, analysis periods, the error type, configuration and the
//! console output helpers.
//!
//! ## Usage
//!
//! ```rust
//! use attrition::libs::period::Period;
//! use attrition::libs::validator::{validate_date, validate_employee_id_input};
//!
//! assert!(validate_date("2024-01-15"));
//! assert_eq!(validate_employee_id_input("42").unwrap(), 42);
//! assert_eq!("yearly".parse::<Period>().unwrap().days(), 365);
//! ```

pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod messages;
pub mod period;
pub mod validator;
pub mod view;
