// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical domain types shared across the Atrio workspace.
//!
//! Storage row types live here so the web, context, and storage crates can
//! exchange them without depending on each other's internals.

use serde::{Deserialize, Serialize};

/// A validated inquiry ready to be persisted.
///
/// Produced by the intake validation step; every field is guaranteed
/// non-empty and the phone field matches the accepted pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Submitted as the `company` form field; stored as `company_name`.
    pub company_name: String,
    pub country: String,
    pub job_title: String,
    pub job_details: String,
}

/// A persisted inquiry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub country: String,
    pub job_title: String,
    pub job_details: String,
    /// ISO 8601 timestamp assigned by the database.
    pub created_at: String,
}

/// A service offering shown on the site and summarized for the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    /// Offerings flagged "active" are the only ones surfaced to visitors.
    pub status: String,
    pub created_at: String,
}

/// A published case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub created_at: String,
}
