pub mod employee;
pub mod init;
pub mod menu;
pub mod report;

use crate::db::{db::Db, employees::Employees};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the database location")]
    Init,
    #[command(about = "Add an employee")]
    Add(employee::AddArgs),
    #[command(about = "Record an employee's termination")]
    Terminate(employee::TerminateArgs),
    #[command(about = "Show a single employee")]
    Show(employee::ShowArgs),
    #[command(about = "List all employees")]
    List,
    #[command(about = "Count terminations in a rolling period (quarterly or yearly)")]
    Count(report::CountArgs),
    #[command(about = "Show attrition by department")]
    Departments,
    #[command(about = "Show attrition by designation")]
    Designations,
    #[command(about = "Show the top reasons for leaving")]
    Reasons,
}

/// Without a subcommand the interactive menu is started.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the employee database
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let command = match self.command {
            Some(Commands::Init) => return init::cmd(),
            command => command,
        };

        // The store is opened once and closed on every path out of here.
        let mut employees = Employees::open(Db::resolve_path(self.db)?)?;
        let result = match command {
            None => menu::cmd(&mut employees),
            Some(Commands::Add(args)) => employee::add(&mut employees, args),
            Some(Commands::Terminate(args)) => employee::terminate(&mut employees, args),
            Some(Commands::Show(args)) => employee::show(&employees, args),
            Some(Commands::List) => employee::list(&employees),
            Some(Commands::Count(args)) => report::count(&employees, &args.period),
            Some(Commands::Departments) => report::departments(&employees),
            Some(Commands::Designations) => report::designations(&employees),
            Some(Commands::Reasons) => report::reasons(&employees),
            Some(Commands::Init) => Ok(()),
        };
        let closed = employees.close();

        result.and(closed)
    }
}
