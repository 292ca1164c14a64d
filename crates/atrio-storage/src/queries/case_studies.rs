// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case study queries.

use atrio_core::AtrioError;
use rusqlite::params;

use crate::database::Database;
use crate::models::CaseStudy;

/// Insert a case study and return its row id.
pub async fn insert_case_study(
    db: &Database,
    title: &str,
    slug: &str,
    summary: &str,
) -> Result<i64, AtrioError> {
    let title = title.to_string();
    let slug = slug.to_string();
    let summary = summary.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO case_studies (title, slug, summary) VALUES (?1, ?2, ?3)",
                params![title, slug, summary],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List the first `limit` case studies in insertion order.
pub async fn list_first(db: &Database, limit: usize) -> Result<Vec<CaseStudy>, AtrioError> {
    let limit = limit as i64;
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, slug, summary, created_at
                 FROM case_studies ORDER BY id ASC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok(CaseStudy {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    slug: row.get(2)?,
                    summary: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            let mut studies = Vec::new();
            for row in rows {
                studies.push(row?);
            }
            Ok(studies)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a case study by its slug.
pub async fn get_by_slug(db: &Database, slug: &str) -> Result<Option<CaseStudy>, AtrioError> {
    let slug = slug.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, slug, summary, created_at
                 FROM case_studies WHERE slug = ?1",
            )?;
            let result = stmt.query_row(params![slug], |row| {
                Ok(CaseStudy {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    slug: row.get(2)?,
                    summary: row.get(3)?,
                    created_at: row.get(4)?,
                })
            });
            match result {
                Ok(study) => Ok(Some(study)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn list_first_returns_insertion_order() {
        let (db, _dir) = setup_db().await;

        for i in 1..=5 {
            insert_case_study(&db, &format!("Study {i}"), &format!("study-{i}"), "summary")
                .await
                .unwrap();
        }

        let studies = list_first(&db, 3).await.unwrap();
        assert_eq!(studies.len(), 3);
        assert_eq!(studies[0].title, "Study 1");
        assert_eq!(studies[2].title, "Study 3");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_by_slug_roundtrips() {
        let (db, _dir) = setup_db().await;

        insert_case_study(&db, "Retail Forecasting", "retail-forecasting", "Cut stockouts by 40%")
            .await
            .unwrap();

        let study = get_by_slug(&db, "retail-forecasting").await.unwrap().unwrap();
        assert_eq!(study.title, "Retail Forecasting");
        assert_eq!(study.summary, "Cut stockouts by 40%");

        let missing = get_by_slug(&db, "no-such-study").await.unwrap();
        assert!(missing.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let (db, _dir) = setup_db().await;

        insert_case_study(&db, "First", "same-slug", "a").await.unwrap();
        let result = insert_case_study(&db, "Second", "same-slug", "b").await;
        assert!(result.is_err());
        db.close().await.unwrap();
    }
}
