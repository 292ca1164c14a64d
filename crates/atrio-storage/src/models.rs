// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `atrio-core::types` so the web and
//! context crates can use them without depending on storage internals. This
//! module re-exports them for convenience within the storage crate.

pub use atrio_core::types::{CaseStudy, Inquiry, NewInquiry, Service};
