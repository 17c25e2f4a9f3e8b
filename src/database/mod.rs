//! Read-only access to the tweet archive.
//!
//! The `Database` struct wraps a SQLite connection opened read-only and
//! implements [`TweetQueries`], the three logical queries the analysis
//! passes consume.

pub mod helpers;
mod queries;
pub mod schema;
pub mod traits;

pub use schema::setup_schema;
pub use traits::TweetQueries;

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::info;

/// The main database interface.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Open an existing tweet database read-only.
    ///
    /// A missing file is reported as [`AppError::DatabaseNotFound`] rather than
    /// letting SQLite create an empty database.
    pub fn open<P: AsRef<Path>>(database_path: P) -> AppResult<Self> {
        let path = database_path.as_ref();
        if !path.exists() {
            return Err(AppError::DatabaseNotFound(path.to_path_buf()));
        }

        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        info!("Database opened read-only: {}", path.display());
        Ok(Self { connection })
    }

    /// Wrap an already-open connection (in-memory databases, tests)
    pub fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}
