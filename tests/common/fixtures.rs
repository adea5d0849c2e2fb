//! Static submission corpora used across harnesses.

use serde_json::{json, Value};
use survey_core::normalizer::FIELD_MAP;

/// The field dictionary as published to downstream consumers, in canonical
/// order. Kept here independently of `FIELD_MAP` so a rename in the crate
/// shows up as a test failure.
pub const PUBLISHED_FIELD_MAP: &[(&str, &str)] = &[
    ("stress_week", "stress_level"),
    ("anxiety_frequency", "anxiety_level"),
    ("sleep_quality", "sleep_quality"),
    ("depression_frequency", "depression"),
    ("self_esteem", "self_esteem"),
    ("physical_fatigue", "mental_health_history"),
    ("headache_frequency", "headache"),
    ("study_load", "study_load"),
    ("academic_satisfaction", "academic_performance"),
    ("career_worry", "future_career_concerns"),
    ("deadline_pressure", "deadline_pressure"),
    ("focus_difficulty", "attention"),
    ("social_support", "social_support"),
    ("peer_pressure", "peer_pressure"),
    ("teacher_comfort", "teacher_student_relationship"),
    ("bullying_experience", "bullying"),
    ("environment_peace", "living_conditions"),
    ("class_activity", "raisedhands"),
    ("resource_usage", "VisITedResources"),
    ("hobby_time", "extracurricular_activities"),
];

/// Keys a client might send that are not part of the dictionary. Includes a
/// canonical name and a differently-cased external name, neither of which
/// may be mapped.
pub const UNRECOGNIZED_KEYS: &[&str] = &[
    "favourite_colour",
    "session_token",
    "stress_level",
    "STRESS_WEEK",
    "submitted_from",
];

/// What the survey page posts with its initial slider positions.
pub fn frontend_submission() -> Value {
    let mut body = serde_json::Map::new();
    for external in FIELD_MAP.keys() {
        body.insert(external.to_string(), json!([5]));
    }
    body.insert("user_id".into(), json!("STU_123"));
    body.insert("user_name".into(), json!("Demo User"));
    Value::Object(body)
}

/// Every slider set, with values 1..=10 cycling in dictionary order so each
/// canonical field can be told apart.
pub fn graded_submission() -> Value {
    let body = FIELD_MAP
        .keys()
        .enumerate()
        .map(|(i, external)| (external.to_string(), json!([(i % 10) + 1])))
        .collect();
    Value::Object(body)
}
