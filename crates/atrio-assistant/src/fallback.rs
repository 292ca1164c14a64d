// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic fallback reply for failed assistant calls.

use atrio_core::AtrioError;

/// Static portion of the fallback reply. The truncated error detail is
/// appended after the "Technical error:" label.
const FALLBACK_BODY: &str = r#"I apologize, but I'm having trouble connecting to the AI service right now. 🤖<br/><br/>
In the meantime, you can:<br/><br/>
• Visit our <a href="/services/" class="text-emerald-400 underline">Services page</a> to learn about our offerings<br/>
• Check out our <a href="/case-study/" class="text-emerald-400 underline">Case Studies</a> to see our success stories<br/>
• <a href="/contact/" class="text-emerald-400 underline">Contact us</a> directly for personalized assistance<br/><br/>
Technical error: "#;

/// Upper bound, in characters, on the error detail embedded in the reply.
const MAX_ERROR_DETAIL_CHARS: usize = 200;

/// Renders the fallback reply shown whenever the assistant cannot produce
/// a model response.
///
/// The full error is expected to be logged by the caller; only a truncated
/// form is embedded here for diagnostic visibility. Truncation counts
/// characters, not bytes, so multi-byte text is never split.
pub fn fallback_reply(error: &AtrioError) -> String {
    let detail: String = error
        .to_string()
        .chars()
        .take(MAX_ERROR_DETAIL_CHARS)
        .collect();
    format!("{FALLBACK_BODY}{detail}")
}
