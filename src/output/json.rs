// JSON rendering for reports and failures.
//
// On failure the CLI prints an envelope of the form
// `{"error": "<CODE>", "message": "<text>"}` so a consumer can tell an empty
// batch from a bad record without parsing prose.

use anyhow::Result;
use serde::Serialize;

use crate::error::AnalysisError;
use crate::models::SentimentReport;

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a str,
    message: String,
}

/// Pretty-printed JSON for a report.
pub fn render_report(report: &SentimentReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Single-line JSON error envelope.
///
/// Typed analysis errors keep their own code; anything else is `INTERNAL`.
pub fn render_error(err: &anyhow::Error) -> String {
    let code = err
        .downcast_ref::<AnalysisError>()
        .map_or("INTERNAL", AnalysisError::code);
    let envelope = ErrorEnvelope {
        error: code,
        message: format!("{err:#}"),
    };
    // Serializing two strings cannot fail; fall back to a fixed envelope anyway
    serde_json::to_string(&envelope)
        .unwrap_or_else(|_| r#"{"error":"INTERNAL","message":"unrenderable error"}"#.to_string())
}
