//! Database layer for the attrition application.
//!
//! Persistence is a single SQLite file holding the `employees` table. The
//! layer is split the same way the application thinks about the data:
//!
//! - [`db`] opens and closes the connection and applies migrations
//! - [`migrations`] versions the schema
//! - [`employees`] is the record store, the only code that writes rows
//! - [`attrition`] is the read-only query engine
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attrition::db::employees::Employees;
//! use attrition::libs::employee::NewEmployee;
//!
//! let mut employees = Employees::new()?;
//! let id = employees.create(&NewEmployee::new("Ada", "Eng", "Engineer", "2021-04-01"))?;
//! employees.record_termination(id, "2024-06-30", "Relocation")?;
//! println!("{:?}", employees.attrition().attrition_by_department()?);
//! employees.close()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Read-only aggregation queries.
pub mod attrition;

/// Connection management and initialization.
pub mod db;

/// Employee record store.
pub mod employees;

/// Database schema migration system.
pub mod migrations;
