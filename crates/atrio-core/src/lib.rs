// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Atrio site backend.
//!
//! This crate provides the shared error type and the canonical domain types
//! used throughout the Atrio workspace.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AtrioError;
pub use types::{CaseStudy, Inquiry, NewInquiry, Service};
