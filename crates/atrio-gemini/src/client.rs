// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for Gemini's OpenAI-compatible chat-completion endpoint.
//!
//! Provides [`GeminiClient`] which handles request construction,
//! authentication, and response decoding. Every request is made exactly
//! once with an explicit timeout; how to degrade on failure is the
//! caller's decision.

use std::time::Duration;

use atrio_config::AtrioConfig;
use atrio_core::AtrioError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse};

/// HTTP client for Gemini chat-completion communication.
///
/// Bearer authentication and the per-request timeout are baked into the
/// underlying connection pool at construction time.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
    request_timeout: Duration,
}

impl GeminiClient {
    /// Creates a new chat-completion client.
    ///
    /// # Arguments
    /// * `api_key` - API key sent as a Bearer token
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash")
    /// * `base_url` - Base URL of the OpenAI-compatible endpoint
    /// * `request_timeout` - Deadline applied to every request
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        request_timeout: Duration,
    ) -> Result<Self, AtrioError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                AtrioError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(request_timeout)
            .build()
            .map_err(|e| AtrioError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            base_url,
            request_timeout,
        })
    }

    /// Creates a client from the loaded configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.gemini.api_key` if set
    /// 2. `GEMINI_API_KEY` environment variable
    /// 3. Returns error if neither is available
    pub fn from_config(config: &AtrioConfig) -> Result<Self, AtrioError> {
        let api_key = resolve_api_key(&config.gemini.api_key)?;
        let client = Self::new(
            api_key,
            config.gemini.model.clone(),
            config.gemini.base_url.clone(),
            Duration::from_secs(config.gemini.request_timeout_secs),
        )?;

        info!(model = config.gemini.model, "Gemini client initialized");
        Ok(client)
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a chat-completion request and returns the decoded response.
    ///
    /// The request is attempted exactly once. A request that exceeds the
    /// configured deadline surfaces as [`AtrioError::Timeout`]; every other
    /// failure maps to [`AtrioError::Provider`].
    pub async fn chat_completion(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, AtrioError> {
        let url = chat_completions_url(&self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AtrioError::Timeout {
                        duration: self.request_timeout,
                    }
                } else {
                    AtrioError::Provider {
                        message: format!("HTTP request failed: {e}"),
                        source: Some(Box::new(e)),
                    }
                }
            })?;

        let status = response.status();
        debug!(status = %status, "completion response received");

        if status.is_success() {
            let body = response.text().await.map_err(|e| AtrioError::Provider {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
            let chat_response: ChatResponse =
                serde_json::from_str(&body).map_err(|e| AtrioError::Provider {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                })?;
            return Ok(chat_response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
            format!("Gemini API error ({status}): {}", api_err.error.message)
        } else {
            format!("API returned {status}: {body}")
        };
        Err(AtrioError::Provider {
            message,
            source: None,
        })
    }
}

/// Joins the base URL with the chat-completions path, tolerating a
/// trailing slash on the configured base.
fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, AtrioError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("GEMINI_API_KEY").map_err(|_| {
        AtrioError::Config(
            "Gemini API key not found. Set gemini.api_key in config or GEMINI_API_KEY environment variable.".into(),
        )
    })
}
