// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini chat-completion client for the Atrio site backend.
//!
//! Talks to Gemini through its OpenAI-compatible endpoint. The client
//! makes exactly one attempt per request with an explicit deadline and
//! reports failures as typed errors; it never degrades a reply itself.

pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse};
