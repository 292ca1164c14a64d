// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact-form validation.
//!
//! All seven fields must be present and non-empty, then the phone number
//! must match the accepted shape. Validation is all-or-nothing: nothing is
//! persisted unless every check passes.

use std::sync::LazyLock;

use atrio_core::NewInquiry;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Accepted phone shape: optional leading '+', then 7 to 20 characters of
/// digits, hyphens, whitespace, or parentheses.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\-\s()]{7,20}$").unwrap());

/// Raw contact-form submission.
///
/// Absent fields deserialize as empty strings so a missing field and an
/// empty field report the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_details: String,
}

/// Validation failures surfaced to the visitor as error toasts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// At least one required field is empty.
    #[error("Please fill all the fields")]
    MissingFields,
    /// The phone field does not match the accepted shape.
    #[error("Enter a valid phone number with country code")]
    InvalidPhone,
}

impl InquiryForm {
    /// Validates the submission and converts it into a persistable record.
    ///
    /// Presence means non-empty: a whitespace-only value passes the
    /// presence check. Values are carried through untrimmed.
    pub fn validate(self) -> Result<NewInquiry, IntakeError> {
        let all_present = [
            &self.name,
            &self.email,
            &self.phone,
            &self.company,
            &self.country,
            &self.job_title,
            &self.job_details,
        ]
        .iter()
        .all(|field| !field.is_empty());

        if !all_present {
            return Err(IntakeError::MissingFields);
        }

        if !PHONE_RE.is_match(&self.phone) {
            return Err(IntakeError::InvalidPhone);
        }

        Ok(NewInquiry {
            name: self.name,
            email: self.email,
            phone: self.phone,
            company_name: self.company,
            country: self.country,
            job_title: self.job_title,
            job_details: self.job_details,
        })
    }
}
