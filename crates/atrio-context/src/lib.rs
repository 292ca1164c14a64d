// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context assembly for the Atrio assistant.
//!
//! Two halves: [`company`] builds a fresh snapshot of offerings and success
//! stories from the store, and [`persona`] interpolates that snapshot into
//! the fixed role prompt sent to the chat-completion service.

pub mod company;
pub mod persona;

pub use company::{company_context, format_context, MAX_CASE_STUDIES, MAX_SERVICES};
pub use persona::render;
