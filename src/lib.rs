//! # Attrition - employee records and attrition analysis
//!
//! A command-line utility that keeps employee records in a local SQLite
//! database, records terminations and answers attrition questions.
//!
//! ## Features
//!
//! - **Record Store**: Add employees and record their termination
//! - **Period Counts**: Terminations in the last 90 or 365 days
//! - **Breakdowns**: Attrition by department and by designation
//! - **Top Reasons**: The five most common reasons for leaving
//! - **Interactive Menu**: Numbered console menu, plus one-shot subcommands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attrition::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
