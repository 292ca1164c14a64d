// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `atrio doctor` command implementation.
//!
//! Runs diagnostic checks against the Atrio environment to identify
//! configuration issues, database problems, and Gemini connectivity
//! failures. Replaces the ad-hoc connection smoke scripts the site used
//! to rely on before launches.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use atrio_config::AtrioConfig;
use atrio_core::AtrioError;
use atrio_gemini::{ChatMessage, ChatRequest, GeminiClient};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `atrio doctor` command.
///
/// Runs quick diagnostic checks. With `--deep`, runs additional intensive
/// checks including a live completion round-trip. With `--plain`, disables
/// colored output.
pub async fn run_doctor(
    config: &AtrioConfig,
    deep: bool,
    plain: bool,
) -> Result<(), AtrioError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let mut results = Vec::new();

    // Quick checks (always run)
    results.push(check_config().await);
    results.push(check_database(&config.storage.database_path).await);
    results.push(check_gemini_credentials(config).await);
    results.push(check_gemini_endpoint(config).await);

    // Deep checks (only with --deep)
    if deep {
        results.push(check_db_integrity(&config.storage.database_path).await);
        results.push(check_gemini_round_trip(config).await);
    }

    // Print results
    println!();
    println!("  atrio doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let status_symbol;
        let line;

        match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    status_symbol = "✓".green().to_string();
                    line = format!(
                        "    {status_symbol} {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                } else {
                    line = format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    status_symbol = "!".yellow().to_string();
                    line = format!(
                        "    {status_symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.yellow()
                    );
                } else {
                    line = format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    status_symbol = "✗".red().to_string();
                    line = format!(
                        "    {status_symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.red()
                    );
                } else {
                    line = format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
        }

        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
        if !deep {
            println!("  Run with --deep for detailed diagnostics.");
        }
    } else {
        println!("  All checks passed.");
    }

    println!();

    Ok(())
}

/// Check configuration loads without errors.
async fn check_config() -> CheckResult {
    let start = Instant::now();
    match atrio_config::load_and_validate() {
        Ok(_) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Check the database opens and report its SQLite version and table count.
async fn check_database(db_path: &str) -> CheckResult {
    let start = Instant::now();
    let path = std::path::Path::new(db_path);

    if !path.exists() {
        return CheckResult {
            name: "Database".to_string(),
            status: CheckStatus::Warn,
            message: format!("not found: {db_path} (will be created on first run)"),
            duration: start.elapsed(),
        };
    }

    match tokio_rusqlite::Connection::open(db_path).await {
        Ok(conn) => {
            let query_result: Result<(String, i64), tokio_rusqlite::Error> = conn
                .call(|conn| {
                    let version: String =
                        conn.query_row("SELECT sqlite_version()", [], |row| row.get(0))?;
                    let tables: i64 = conn.query_row(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                        [],
                        |row| row.get(0),
                    )?;
                    Ok((version, tables))
                })
                .await;

            match query_result {
                Ok((version, tables)) => CheckResult {
                    name: "Database".to_string(),
                    status: CheckStatus::Pass,
                    message: format!("SQLite {version}, {tables} table(s)"),
                    duration: start.elapsed(),
                },
                Err(e) => CheckResult {
                    name: "Database".to_string(),
                    status: CheckStatus::Fail,
                    message: format!("query failed: {e}"),
                    duration: start.elapsed(),
                },
            }
        }
        Err(e) => CheckResult {
            name: "Database".to_string(),
            status: CheckStatus::Fail,
            message: format!("open failed: {e}"),
            duration: start.elapsed(),
        },
    }
}

/// Check a Gemini API key is available from config or environment.
async fn check_gemini_credentials(config: &AtrioConfig) -> CheckResult {
    let start = Instant::now();

    let from_config = config
        .gemini
        .api_key
        .as_deref()
        .is_some_and(|key| !key.is_empty());

    let (status, message) = if from_config {
        (CheckStatus::Pass, "configured via gemini.api_key".to_string())
    } else if std::env::var("GEMINI_API_KEY").is_ok() {
        (CheckStatus::Pass, "configured via GEMINI_API_KEY".to_string())
    } else {
        (
            CheckStatus::Warn,
            "no API key configured (assistant will serve fallback replies)".to_string(),
        )
    };

    CheckResult {
        name: "Gemini credentials".to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

/// Check the Gemini endpoint is reachable via HEAD request.
async fn check_gemini_endpoint(config: &AtrioConfig) -> CheckResult {
    let start = Instant::now();

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            return CheckResult {
                name: "Gemini endpoint".to_string(),
                status: CheckStatus::Fail,
                message: format!("HTTP client error: {e}"),
                duration: start.elapsed(),
            };
        }
    };

    // Any HTTP response counts as reachable; auth happens per-request.
    match client.head(&config.gemini.base_url).send().await {
        Ok(_resp) => CheckResult {
            name: "Gemini endpoint".to_string(),
            status: CheckStatus::Pass,
            message: "reachable".to_string(),
            duration: start.elapsed(),
        },
        Err(e) => {
            let msg = if e.is_timeout() {
                "timeout (5s)".to_string()
            } else if e.is_connect() {
                "connection refused".to_string()
            } else {
                format!("error: {e}")
            };
            CheckResult {
                name: "Gemini endpoint".to_string(),
                status: CheckStatus::Fail,
                message: msg,
                duration: start.elapsed(),
            }
        }
    }
}

/// Deep check: SQLite integrity check.
async fn check_db_integrity(db_path: &str) -> CheckResult {
    let start = Instant::now();
    let path = std::path::Path::new(db_path);

    if !path.exists() {
        return CheckResult {
            name: "DB integrity".to_string(),
            status: CheckStatus::Warn,
            message: "database not found (skipped)".to_string(),
            duration: start.elapsed(),
        };
    }

    match tokio_rusqlite::Connection::open(db_path).await {
        Ok(conn) => {
            let result: Result<Vec<String>, tokio_rusqlite::Error> = conn
                .call(|conn| {
                    let mut stmt = conn.prepare("PRAGMA integrity_check")?;
                    let rows: Vec<String> = stmt
                        .query_map([], |row| row.get(0))?
                        .filter_map(|r| r.ok())
                        .collect();
                    Ok(rows)
                })
                .await;

            match result {
                Ok(rows) if rows.len() == 1 && rows[0] == "ok" => CheckResult {
                    name: "DB integrity".to_string(),
                    status: CheckStatus::Pass,
                    message: "ok".to_string(),
                    duration: start.elapsed(),
                },
                Ok(rows) => CheckResult {
                    name: "DB integrity".to_string(),
                    status: CheckStatus::Fail,
                    message: format!("{} issue(s) found", rows.len()),
                    duration: start.elapsed(),
                },
                Err(e) => CheckResult {
                    name: "DB integrity".to_string(),
                    status: CheckStatus::Fail,
                    message: format!("check failed: {e}"),
                    duration: start.elapsed(),
                },
            }
        }
        Err(e) => CheckResult {
            name: "DB integrity".to_string(),
            status: CheckStatus::Fail,
            message: format!("open failed: {e}"),
            duration: start.elapsed(),
        },
    }
}

/// Deep check: live one-sentence completion round-trip.
async fn check_gemini_round_trip(config: &AtrioConfig) -> CheckResult {
    let start = Instant::now();

    let client = match GeminiClient::from_config(config) {
        Ok(client) => client,
        Err(_) => {
            return CheckResult {
                name: "Gemini round-trip".to_string(),
                status: CheckStatus::Warn,
                message: "no API key configured (skipped)".to_string(),
                duration: start.elapsed(),
            };
        }
    };

    let request = ChatRequest {
        model: config.gemini.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".into(),
                content: "You are a helpful assistant.".into(),
            },
            ChatMessage {
                role: "user".into(),
                content: "Say hello in one sentence.".into(),
            },
        ],
    };

    match client.chat_completion(&request).await {
        Ok(response) => match response.first_content() {
            Some(text) => CheckResult {
                name: "Gemini round-trip".to_string(),
                status: CheckStatus::Pass,
                message: format!("reply received ({} chars)", text.chars().count()),
                duration: start.elapsed(),
            },
            None => CheckResult {
                name: "Gemini round-trip".to_string(),
                status: CheckStatus::Fail,
                message: "response contained no message content".to_string(),
                duration: start.elapsed(),
            },
        },
        Err(e) => CheckResult {
            name: "Gemini round-trip".to_string(),
            status: CheckStatus::Fail,
            message: format!("completion failed: {e}"),
            duration: start.elapsed(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn check_result_has_required_fields() {
        let result = CheckResult {
            name: "test".to_string(),
            status: CheckStatus::Pass,
            message: "ok".to_string(),
            duration: Duration::from_millis(5),
        };
        assert_eq!(result.name, "test");
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.message, "ok");
        assert_eq!(result.duration.as_millis(), 5);
    }

    #[tokio::test]
    async fn check_config_passes_with_defaults() {
        let result = check_config().await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.name, "Configuration");
    }

    #[tokio::test]
    async fn check_database_missing_warns() {
        let result = check_database("/tmp/nonexistent-atrio-test-xyz.db").await;
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.message.contains("not found"));
    }

    #[tokio::test]
    async fn check_database_reports_version_and_tables() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("atrio.db");
        let db = atrio_storage::Database::open(db_path.to_str().unwrap())
            .await
            .unwrap();
        db.close().await.unwrap();

        let result = check_database(db_path.to_str().unwrap()).await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.starts_with("SQLite "), "got: {}", result.message);
        assert!(result.message.contains("table(s)"), "got: {}", result.message);
    }

    #[tokio::test]
    async fn check_db_integrity_missing_warns() {
        let result = check_db_integrity("/tmp/nonexistent-atrio-test-xyz.db").await;
        assert_eq!(result.status, CheckStatus::Warn);
    }

    #[tokio::test]
    async fn check_db_integrity_passes_on_fresh_database() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("atrio.db");
        let db = atrio_storage::Database::open(db_path.to_str().unwrap())
            .await
            .unwrap();
        db.close().await.unwrap();

        let result = check_db_integrity(db_path.to_str().unwrap()).await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.message, "ok");
    }

    #[tokio::test]
    async fn check_gemini_credentials_pass_with_config_key() {
        let mut config = AtrioConfig::default();
        config.gemini.api_key = Some("test-key".into());

        let result = check_gemini_credentials(&config).await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.contains("gemini.api_key"));
    }

    #[tokio::test]
    async fn check_gemini_endpoint_reachable_against_mock() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let mut config = AtrioConfig::default();
        config.gemini.base_url = server.uri();

        let result = check_gemini_endpoint(&config).await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.message, "reachable");
    }

    #[tokio::test]
    async fn check_gemini_round_trip_against_mock() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-doctor",
                "object": "chat.completion",
                "model": "gemini-2.0-flash",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello!"},
                    "finish_reason": "stop"
                }]
            })))
            .mount(&server)
            .await;

        let mut config = AtrioConfig::default();
        config.gemini.api_key = Some("test-key".into());
        config.gemini.base_url = server.uri();

        let result = check_gemini_round_trip(&config).await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.contains("reply received"), "got: {}", result.message);
    }
}
