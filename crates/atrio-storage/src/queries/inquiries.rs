// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inquiry persistence.
//!
//! The intake pipeline only ever creates inquiries; there are no update or
//! delete operations. Reads exist for tests and operator tooling.

use atrio_core::AtrioError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{Inquiry, NewInquiry};

/// Insert a validated inquiry and return its row id.
pub async fn create_inquiry(db: &Database, inquiry: &NewInquiry) -> Result<i64, AtrioError> {
    let inquiry = inquiry.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO inquiries (name, email, phone, company_name, country, job_title, job_details)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    inquiry.name,
                    inquiry.email,
                    inquiry.phone,
                    inquiry.company_name,
                    inquiry.country,
                    inquiry.job_title,
                    inquiry.job_details,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get an inquiry by id.
pub async fn get_inquiry(db: &Database, id: i64) -> Result<Option<Inquiry>, AtrioError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, phone, company_name, country, job_title, job_details, created_at
                 FROM inquiries WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], |row| {
                Ok(Inquiry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    company_name: row.get(4)?,
                    country: row.get(5)?,
                    job_title: row.get(6)?,
                    job_details: row.get(7)?,
                    created_at: row.get(8)?,
                })
            });
            match result {
                Ok(inquiry) => Ok(Some(inquiry)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Count all stored inquiries.
pub async fn count_inquiries(db: &Database) -> Result<i64, AtrioError> {
    db.connection()
        .call(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM inquiries", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
