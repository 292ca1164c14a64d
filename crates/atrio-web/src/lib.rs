// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP layer for the Atrio site backend.
//!
//! Routes, handlers, form validation, session-scoped toast queues, and
//! the minimal server-rendered pages. The assistant and storage crates do
//! the real work; this crate is the boundary that turns their typed
//! results into redirects, toasts, and JSON replies.

pub mod handlers;
pub mod intake;
pub mod pages;
pub mod server;
pub mod toast;

pub use intake::{InquiryForm, IntakeError};
pub use server::{build_router, start_server, SiteState};
pub use toast::{color_for, Severity, Toast, ToastStore};
