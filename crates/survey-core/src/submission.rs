//! Submit pipeline: body bytes → [`SurveyDocument`] → store.
//!
//! [`submit`] returns an explicit `Result`; turning a [`SubmitError`] into a
//! wire response is left entirely to the caller.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::SubmitError;
use crate::normalizer::{normalize, unrecognized_keys};
use crate::store::SurveyStore;
use crate::types::{SubmissionRecord, SurveyDocument, DEFAULT_USER_ID, DEFAULT_USER_NAME};

/// A document the store has acknowledged.
#[derive(Debug, Clone)]
pub struct Submitted {
    pub inserted_id: String,
    pub document: SurveyDocument,
}

/// Parse a request body into a submission record.
pub fn parse_submission(body: &[u8]) -> Result<SubmissionRecord, SubmitError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(record) => Ok(record),
        other => Err(SubmitError::NotAnObject(json_kind(&other))),
    }
}

/// Assemble the persisted document for a parsed submission.
///
/// `user_id` and `user_name` are read straight from the record, outside the
/// field dictionary, falling back to [`DEFAULT_USER_ID`] / [`DEFAULT_USER_NAME`].
pub fn build_document(record: &SubmissionRecord, created_at: DateTime<Utc>) -> SurveyDocument {
    SurveyDocument {
        user_id: identity_field(record, "user_id", DEFAULT_USER_ID),
        user_name: identity_field(record, "user_name", DEFAULT_USER_NAME),
        survey_data: normalize(record),
        created_at,
    }
}

/// Parse, normalize, and store one submission.
pub async fn submit(store: &dyn SurveyStore, body: &[u8]) -> Result<Submitted, SubmitError> {
    let record = parse_submission(body)?;

    let ignored = unrecognized_keys(&record);
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "dropping unrecognized submission keys");
    }

    let document = build_document(&record, Utc::now());
    let inserted_id = store.insert_one(&document).await?;

    Ok(Submitted {
        inserted_id,
        document,
    })
}

/// Read an identity field as a string.
///
/// `null` counts as absent and gets `default`; numbers, booleans and the like
/// are stored as their JSON text. A client's `null` or numeric `user_id` is
/// therefore not persisted with its sent type: both fields are always strings.
fn identity_field(record: &SubmissionRecord, key: &str, default: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
