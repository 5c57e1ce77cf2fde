//! Database schema migration management and versioning.
//!
//! Every schema change is a numbered migration applied inside a
//! transaction and recorded in the `migrations` table, so opening an
//! existing database only runs what is missing.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attrition::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("attrition.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    ///
    /// Migrations are forward-only; an existing version must never be
    /// edited once released, new changes get a new version.
    fn register_migrations(&mut self) {
        // Version 1: the employees table
        self.add_migration(1, "create_employees_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY,
        name TEXT,
        department TEXT,
        designation TEXT,
        joining_date DATE,
        termination_date DATE,
        reason_for_leaving TEXT
    )",
                [],
            )?;
            Ok(())
        });

        // Version 2: indices backing the attrition queries
        self.add_migration(2, "add_attrition_indices", |tx| {
            // Period counts filter on termination_date
            tx.execute("CREATE INDEX IF NOT EXISTS idx_employees_termination_date ON employees(termination_date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_employees_designation ON employees(designation)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_employees_reason ON employees(reason_for_leaving)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Executes all pending migrations in a single transaction.
    ///
    /// If any migration fails the transaction is rolled back and the
    /// database is left at its previous version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        tracing::info!("{}", Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            tracing::info!("{}", Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    tracing::info!("{}", Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    tracing::error!("{}", Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        tracing::info!("{}", Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 when nothing has been applied yet.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let tracked: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
            [],
            |row| row.get(0),
        )?;
        if !tracked {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    /// Applied migrations as `(version, name, applied_at)`, ordered by version.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies all pending migrations to `conn`.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(current < latest)
}
