// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Company context assembly.
//!
//! Builds a natural-language snapshot of current offerings and success
//! stories from the data store to ground assistant replies. The snapshot is
//! recomputed on every query; caching it would misrepresent current
//! offerings.

use atrio_core::{AtrioError, CaseStudy, Service};
use atrio_storage::queries::{case_studies, services};
use atrio_storage::Database;
use tracing::debug;

/// Maximum number of offering lines in the context block.
pub const MAX_SERVICES: usize = 6;

/// Maximum number of case-study lines in the context block.
pub const MAX_CASE_STUDIES: usize = 3;

/// Shown when no offerings are flagged active.
const SERVICES_FALLBACK: &str = "AI/ML Services, NLP Solutions, Computer Vision";

/// Shown when no case studies exist.
const CASE_STUDIES_FALLBACK: &str = "Multiple successful AI implementation projects";

/// Build the context block from the current store contents.
pub async fn company_context(db: &Database) -> Result<String, AtrioError> {
    let services = services::list_active(db, MAX_SERVICES).await?;
    let studies = case_studies::list_first(db, MAX_CASE_STUDIES).await?;
    debug!(
        services = services.len(),
        case_studies = studies.len(),
        "assembled company context"
    );
    Ok(format_context(&services, &studies))
}

/// Render the context block from already-loaded rows.
///
/// Caps at [`MAX_SERVICES`] offering lines and [`MAX_CASE_STUDIES`]
/// case-study lines, substitutes the generic fallbacks for empty sections,
/// and always appends the navigational pointer block.
pub fn format_context(services: &[Service], case_studies: &[CaseStudy]) -> String {
    let services_info = if services.is_empty() {
        SERVICES_FALLBACK.to_string()
    } else {
        services
            .iter()
            .take(MAX_SERVICES)
            .map(|s| format!("- {}: {}", s.title, s.short_description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let case_studies_info = if case_studies.is_empty() {
        CASE_STUDIES_FALLBACK.to_string()
    } else {
        case_studies
            .iter()
            .take(MAX_CASE_STUDIES)
            .map(|cs| format!("- {}: {}", cs.title, cs.summary))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "\nSERVICES WE OFFER:\n{services_info}\n\nSUCCESS STORIES:\n{case_studies_info}\n\n\
         CONTACT INFORMATION:\n\
         - Website: Visit /contact/ page for inquiry form\n\
         - Services Page: /services/\n\
         - Case Studies: /case-study/\n\
         - Articles: /articles/\n\
         - Events: /events/\n"
    )
}
