// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal server-rendered pages.
//!
//! Rendering is deliberately plain: a shared shell plus per-page body
//! builders returning complete HTML documents. All dynamic text is
//! escaped; assistant replies are never rendered here (they go out as
//! JSON for inline client-side insertion).

use atrio_core::CaseStudy;

use crate::toast::Toast;

/// Escapes text for embedding in HTML content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page_shell(site_name: &str, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{} | {}</title>\n\
         </head>\n\
         <body>\n\
         {}\
         </body>\n\
         </html>\n",
        escape_html(title),
        escape_html(site_name),
        body,
    )
}

fn toast_list(toasts: &[Toast]) -> String {
    if toasts.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"toasts\">\n");
    for toast in toasts {
        out.push_str(&format!(
            "<li class=\"toast toast-{}\" data-color=\"{}\">{}</li>\n",
            toast.severity,
            toast.color(),
            escape_html(&toast.text),
        ));
    }
    out.push_str("</ul>\n");
    out
}

/// Renders the home page: queued status messages, the case-study teaser
/// list, and the contact form.
pub fn home_page(site_name: &str, toasts: &[Toast], case_studies: &[CaseStudy]) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(site_name)));
    body.push_str(&toast_list(toasts));

    body.push_str("<section id=\"case-studies\">\n<h2>Success Stories</h2>\n<ul>\n");
    for study in case_studies {
        body.push_str(&format!(
            "<li><a href=\"/case-studies/{}\">{}</a>: {}</li>\n",
            escape_html(&study.slug),
            escape_html(&study.title),
            escape_html(&study.summary),
        ));
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str(
        "<section id=\"contact\">\n\
         <h2>Work with us</h2>\n\
         <form method=\"post\" action=\"/contact\">\n\
         <input name=\"name\" placeholder=\"Name\">\n\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\n\
         <input name=\"phone\" placeholder=\"Phone\">\n\
         <input name=\"company\" placeholder=\"Company\">\n\
         <input name=\"country\" placeholder=\"Country\">\n\
         <input name=\"job_title\" placeholder=\"Job title\">\n\
         <textarea name=\"job_details\" placeholder=\"How can we help?\"></textarea>\n\
         <button type=\"submit\">Submit inquiry</button>\n\
         </form>\n\
         </section>\n",
    );

    page_shell(site_name, "Home", &body)
}

/// Renders a case-study detail page.
pub fn case_study_page(site_name: &str, study: &CaseStudy) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to home</a></p>\n",
        escape_html(&study.title),
        escape_html(&study.summary),
    );
    page_shell(site_name, &study.title, &body)
}

/// Renders the 404 page.
pub fn not_found_page(site_name: &str) -> String {
    page_shell(
        site_name,
        "Not found",
        "<h1>Page not found</h1>\n<p><a href=\"/\">Back to home</a></p>\n",
    )
}

/// Renders the generic error page.
pub fn error_page(site_name: &str) -> String {
    page_shell(
        site_name,
        "Something went wrong",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>\n<p><a href=\"/\">Back to home</a></p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Severity;

    fn study(slug: &str, title: &str) -> CaseStudy {
        CaseStudy {
            id: 1,
            title: title.into(),
            slug: slug.into(),
            summary: "Cut costs by 40%".into(),
            created_at: "2026-01-01T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn escape_html_covers_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn home_page_renders_toasts_with_severity_and_color() {
        let toasts = vec![Toast {
            text: "Inquiry submitted successfully".into(),
            severity: Severity::Success,
        }];
        let html = home_page("AI Solutions", &toasts, &[]);
        assert!(html.contains("toast-success"));
        assert!(html.contains("data-color=\"green\""));
        assert!(html.contains("Inquiry submitted successfully"));
    }

    #[test]
    fn home_page_escapes_toast_text() {
        let toasts = vec![Toast {
            text: "<script>alert(1)</script>".into(),
            severity: Severity::Error,
        }];
        let html = home_page("AI Solutions", &toasts, &[]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn home_page_omits_toast_list_when_empty() {
        let html = home_page("AI Solutions", &[], &[]);
        assert!(!html.contains("class=\"toasts\""));
    }

    #[test]
    fn home_page_links_case_studies_by_slug() {
        let html = home_page(
            "AI Solutions",
            &[],
            &[study("retail-forecasting", "Retail Forecasting")],
        );
        assert!(html.contains("href=\"/case-studies/retail-forecasting\""));
        assert!(html.contains("Retail Forecasting"));
    }

    #[test]
    fn home_page_contains_all_form_fields() {
        let html = home_page("AI Solutions", &[], &[]);
        for field in [
            "name", "email", "phone", "company", "country", "job_title", "job_details",
        ] {
            assert!(
                html.contains(&format!("name=\"{field}\"")),
                "missing field: {field}"
            );
        }
        assert!(html.contains("action=\"/contact\""));
    }

    #[test]
    fn case_study_page_shows_title_and_summary() {
        let html = case_study_page("AI Solutions", &study("x", "Churn Model"));
        assert!(html.contains("<h1>Churn Model</h1>"));
        assert!(html.contains("Cut costs by 40%"));
    }

    #[test]
    fn not_found_page_titles_correctly() {
        let html = not_found_page("AI Solutions");
        assert!(html.contains("<title>Not found | AI Solutions</title>"));
    }
}
