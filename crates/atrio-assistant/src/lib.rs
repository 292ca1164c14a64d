// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assistant pipeline for the Atrio site backend.
//!
//! Combines the company context, the fixed persona template, and the
//! Gemini client into a single reply operation, plus the deterministic
//! fallback used at the web boundary when that operation fails.

pub mod fallback;
pub mod generator;

pub use fallback::fallback_reply;
pub use generator::AssistantEngine;
