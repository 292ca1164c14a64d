// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background thread.
//! The `Database` struct IS the single writer: query modules accept `&Database`
//! and call through `connection().call()`. Do NOT create additional Connection
//! instances for writes.

use std::path::Path;

use atrio_core::AtrioError;
use tokio_rusqlite::Connection;

/// Handle to the site database.
///
/// Cheap to clone; all clones share the same background connection thread.
#[derive(Clone)]
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply PRAGMAs, and run migrations.
    ///
    /// The parent directory is created if it does not exist yet.
    pub async fn open(path: &str) -> Result<Self, AtrioError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(AtrioError::storage)?;
        }

        let connection = Connection::open(path)
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        connection
            .call(|conn| {
                conn.execute_batch(
                    "PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;
                     PRAGMA foreign_keys = ON;
                     PRAGMA busy_timeout = 5000;",
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        connection
            .call(|conn| crate::migrations::run_migrations(conn))
            .await
            .map_err(|e| AtrioError::Storage {
                source: Box::new(e),
            })?;

        tracing::debug!(path, "database opened");
        Ok(Self { connection })
    }

    /// Access the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Close the database, flushing WAL state.
    pub async fn close(self) -> Result<(), AtrioError> {
        self.connection
            .close()
            .await
            .map_err(|e| AtrioError::Storage {
                source: Box::new(e),
            })
    }
}

/// Map a tokio-rusqlite error into the shared storage error.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> AtrioError {
    AtrioError::Storage {
        source: Box::new(e),
    }
}
