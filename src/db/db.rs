use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Owned handle to the employee database.
///
/// Opening a `Db` applies any pending migrations, so the `employees` table
/// always exists once a handle has been obtained.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the location resolved from the configuration.
    pub fn new() -> Result<Db> {
        Self::open(Self::resolve_path(None)?)
    }

    pub fn resolve_path(cli_path: Option<PathBuf>) -> Result<PathBuf> {
        Config::read()?.resolve_db_path(cli_path, &DataStorage::new())
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        msg_debug!(Message::UsingDatabase(path.display().to_string()));

        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;
        tracing::info!(path = %path.display(), "database opened");

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    pub fn open_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        tracing::info!("database closed");
        Ok(())
    }
}
