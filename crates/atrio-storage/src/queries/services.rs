// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service offering queries.

use atrio_core::AtrioError;
use rusqlite::params;

use crate::database::Database;
use crate::models::Service;

/// Insert a service offering and return its row id.
pub async fn insert_service(
    db: &Database,
    title: &str,
    short_description: &str,
    status: &str,
) -> Result<i64, AtrioError> {
    let title = title.to_string();
    let short_description = short_description.to_string();
    let status = status.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO services (title, short_description, status) VALUES (?1, ?2, ?3)",
                params![title, short_description, status],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List offerings flagged active, oldest first, capped at `limit`.
pub async fn list_active(db: &Database, limit: usize) -> Result<Vec<Service>, AtrioError> {
    let limit = limit as i64;
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, short_description, status, created_at
                 FROM services WHERE status = 'active' ORDER BY id ASC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok(Service {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    short_description: row.get(2)?,
                    status: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            let mut services = Vec::new();
            for row in rows {
                services.push(row?);
            }
            Ok(services)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
