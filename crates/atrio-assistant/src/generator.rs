// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assistant reply generation: context assembly, prompt rendering, and the
//! chat-completion call.

use atrio_config::AtrioConfig;
use atrio_context::{company_context, render};
use atrio_core::AtrioError;
use atrio_gemini::{ChatMessage, ChatRequest, GeminiClient};
use atrio_storage::Database;
use tracing::{debug, warn};

/// Produces assistant replies grounded in the current store contents.
///
/// Holds no client when no API credential could be resolved at startup;
/// [`AssistantEngine::reply`] then fails fast without touching the network
/// and the web boundary serves the fallback text.
#[derive(Clone)]
pub struct AssistantEngine {
    db: Database,
    client: Option<GeminiClient>,
}

impl AssistantEngine {
    /// Creates an engine with an explicit (possibly absent) client.
    pub fn new(db: Database, client: Option<GeminiClient>) -> Self {
        Self { db, client }
    }

    /// Builds the engine from configuration.
    ///
    /// A missing or unusable API credential degrades the engine to
    /// fallback-only mode instead of failing startup.
    pub fn from_config(db: Database, config: &AtrioConfig) -> Self {
        let client = match GeminiClient::from_config(config) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!(error = %e, "assistant running without a Gemini client");
                None
            }
        };
        Self { db, client }
    }

    /// Returns true when a chat-completion client is available.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Generates a reply for the visitor's query.
    ///
    /// The company context is rebuilt from the store on every call so the
    /// prompt always reflects current offerings. Returns the model's first
    /// choice verbatim; all failure paths surface as typed errors for the
    /// boundary layer to convert into the fallback reply.
    pub async fn reply(&self, query: &str) -> Result<String, AtrioError> {
        let Some(client) = &self.client else {
            return Err(AtrioError::Config(
                "assistant is not configured with a Gemini API key".into(),
            ));
        };

        let context = company_context(&self.db).await?;
        let system_prompt = render(&context);

        let request = ChatRequest {
            model: client.model().to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user".into(),
                    content: query.to_string(),
                },
            ],
        };

        debug!(query_len = query.len(), "dispatching assistant query");
        let response = client.chat_completion(&request).await?;

        match response.first_content() {
            Some(text) => Ok(text.to_string()),
            None => Err(AtrioError::provider(
                "completion response contained no message content",
            )),
        }
    }
}
