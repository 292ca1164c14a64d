// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session-scoped status messages ("toasts") queued for the next render.

use std::sync::Arc;

use dashmap::DashMap;
use strum::{Display, EnumString};

/// Severity of a queued status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// A completed action (green).
    Success,
    /// A rejected or failed action (red).
    Error,
    /// A cautionary note (yellow).
    Warning,
    /// Neutral information (blue).
    Info,
}

impl Severity {
    /// Display color for this severity.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "green",
            Severity::Error => "red",
            Severity::Warning => "yellow",
            Severity::Info => "blue",
        }
    }
}

/// Maps a severity tag to its display color. Unrecognized tags map to gray.
pub fn color_for(tag: &str) -> &'static str {
    match tag.parse::<Severity>() {
        Ok(severity) => severity.color(),
        Err(_) => "gray",
    }
}

/// A single queued status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Human-readable message text.
    pub text: String,
    /// Severity tag driving the display color.
    pub severity: Severity,
}

impl Toast {
    /// Display color derived from the severity.
    pub fn color(&self) -> &'static str {
        self.severity.color()
    }
}

/// Per-session queues of pending status messages.
///
/// Keyed by the visitor's session id so concurrent visitors can never see
/// each other's messages. Queues accumulate across a redirect and are
/// consumed in insertion order by the next rendered page.
#[derive(Clone, Default)]
pub struct ToastStore {
    queues: Arc<DashMap<String, Vec<Toast>>>,
}

impl ToastStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a message for the given session.
    pub fn push(&self, session_id: &str, severity: Severity, text: impl Into<String>) {
        self.queues
            .entry(session_id.to_string())
            .or_default()
            .push(Toast {
                text: text.into(),
                severity,
            });
    }

    /// Removes and returns all queued messages for the session, oldest first.
    pub fn drain(&self, session_id: &str) -> Vec<Toast> {
        self.queues
            .remove(session_id)
            .map(|(_, toasts)| toasts)
            .unwrap_or_default()
    }
}
