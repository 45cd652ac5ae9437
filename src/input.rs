// Review batch parsing.
//
// The batch arrives as a JSON array of `{ "text": ..., "location": ... }`
// objects. Each record is checked individually so a bad record is reported
// by position instead of being skipped, which would skew the aggregates.

use serde_json::Value;

use crate::error::AnalysisError;
use crate::models::Review;

/// Parse a JSON document into a batch of reviews.
pub fn parse_reviews(json: &str) -> Result<Vec<Review>, AnalysisError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| AnalysisError::Internal(format!("invalid JSON input: {e}")))?;
    reviews_from_value(&value)
}

/// Validate an already-parsed JSON value as a batch of reviews.
///
/// Empty strings are valid for both fields. Extra fields are ignored.
pub fn reviews_from_value(value: &Value) -> Result<Vec<Review>, AnalysisError> {
    let records = value.as_array().ok_or_else(|| {
        AnalysisError::Internal("expected a JSON array of review records".to_string())
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| review_from_record(index, record))
        .collect()
}

fn review_from_record(index: usize, record: &Value) -> Result<Review, AnalysisError> {
    let obj = record
        .as_object()
        .ok_or_else(|| AnalysisError::malformed(index, "record is not an object"))?;

    let text = string_field(index, obj, "text")?;
    let location = string_field(index, obj, "location")?;

    Ok(Review { text, location })
}

fn string_field(
    index: usize,
    obj: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, AnalysisError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(AnalysisError::malformed(
            index,
            format!("field `{field}` must be a string, got {}", json_type(other)),
        )),
        None => Err(AnalysisError::malformed(
            index,
            format!("missing field `{field}`"),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
