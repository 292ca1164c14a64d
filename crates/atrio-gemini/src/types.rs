// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible chat-completion request/response types.
//!
//! Gemini exposes an OpenAI-compatible surface under `/v1beta/openai/`;
//! these types cover the subset of that wire format the assistant uses.

use serde::{Deserialize, Serialize};

/// A request to the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier (e.g., "gemini-2.0-flash").
    pub model: String,

    /// Conversation messages, system prompt first.
    pub messages: Vec<ChatMessage>,
}

/// A single message in the chat-completion conversation format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,

    /// Plain-text content of the message.
    pub content: String,
}

/// A full response from the chat-completions endpoint.
///
/// Unknown fields ("object", "created", provider extensions) are ignored
/// rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response ID, when the provider reports one.
    #[serde(default)]
    pub id: Option<String>,

    /// Model that generated the response.
    #[serde(default)]
    pub model: Option<String>,

    /// Candidate completions. Usually exactly one.
    pub choices: Vec<Choice>,

    /// Token usage statistics, when the provider reports them.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Returns the text of the first choice, if the response carries one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

/// A single candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Position of this choice in the candidate list.
    #[serde(default)]
    pub index: u32,

    /// The generated message.
    pub message: ChoiceMessage,

    /// Reason the generation stopped (e.g., "stop", "length").
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message inside a response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Role (always "assistant").
    #[serde(default)]
    pub role: String,

    /// Generated text. Nullable on the wire.
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics from the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    /// Number of prompt tokens consumed.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Number of completion tokens generated.
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens for the request.
    #[serde(default)]
    pub total_tokens: u32,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Error type identifier, when present.
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    /// Provider-specific error code. A string or a number depending on the provider.
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}
