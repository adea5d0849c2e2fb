//! Normalizer — maps a [`SubmissionRecord`] onto the canonical survey schema.
//!
//! The field dictionary is fixed at compile time. Downstream consumers key on
//! the canonical names, so entries here are part of the external contract and
//! must not be renamed.

use phf::phf_ordered_map;
use serde_json::Value;

use crate::types::{CanonicalRecord, SubmissionRecord};

/// Value used for a dictionary field the submission does not mention.
pub const MISSING_FIELD_VALUE: i64 = 0;

/// Submission keys read directly by the handler rather than the dictionary.
pub const IDENTITY_KEYS: [&str; 2] = ["user_id", "user_name"];

/// External (client) field name → canonical field name, in canonical order.
pub static FIELD_MAP: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "stress_week" => "stress_level",
    "anxiety_frequency" => "anxiety_level",
    "sleep_quality" => "sleep_quality",
    "depression_frequency" => "depression",
    "self_esteem" => "self_esteem",
    "physical_fatigue" => "mental_health_history",
    "headache_frequency" => "headache",
    "study_load" => "study_load",
    "academic_satisfaction" => "academic_performance",
    "career_worry" => "future_career_concerns",
    "deadline_pressure" => "deadline_pressure",
    "focus_difficulty" => "attention",
    "social_support" => "social_support",
    "peer_pressure" => "peer_pressure",
    "teacher_comfort" => "teacher_student_relationship",
    "bullying_experience" => "bullying",
    "environment_peace" => "living_conditions",
    "class_activity" => "raisedhands",
    "resource_usage" => "VisITedResources",
    "hobby_time" => "extracurricular_activities",
};

/// Canonical name for an external field name, if it is in the dictionary.
pub fn canonical_name(external: &str) -> Option<&'static str> {
    FIELD_MAP.get(external).copied()
}

/// Build the canonical record for a submission.
///
/// Every dictionary entry yields exactly one output field. Missing fields
/// become [`MISSING_FIELD_VALUE`]; present values go through [`scalarize`].
/// Keys outside the dictionary are ignored. No type or range checks are made.
pub fn normalize(record: &SubmissionRecord) -> CanonicalRecord {
    FIELD_MAP
        .entries()
        .map(|(external, canonical)| {
            let value = record
                .get(*external)
                .map(scalarize)
                .unwrap_or_else(|| Value::from(MISSING_FIELD_VALUE));
            (*canonical, value)
        })
        .collect()
}

/// First element of a non-empty array, otherwise the value itself.
///
/// An empty array is passed through unchanged.
pub fn scalarize(value: &Value) -> Value {
    match value {
        Value::Array(items) => items.first().unwrap_or(value).clone(),
        other => other.clone(),
    }
}

/// Keys in the submission that neither the dictionary nor the identity
/// fields account for. These are dropped from the stored document.
pub fn unrecognized_keys(record: &SubmissionRecord) -> Vec<&str> {
    record
        .keys()
        .map(String::as_str)
        .filter(|key| !FIELD_MAP.contains_key(*key) && !IDENTITY_KEYS.contains(key))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
