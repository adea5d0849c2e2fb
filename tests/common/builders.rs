//! Test builders — ergonomic constructors for submission bodies.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use serde_json::{json, Map, Value};
use survey_core::normalizer::FIELD_MAP;
use survey_core::SubmissionRecord;

/// Fluent builder for submission bodies.
///
/// ```rust
/// let body = SubmissionBuilder::new()
///     .user_id("STU_042")
///     .slider("stress_week", 8)
///     .bytes();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubmissionBuilder {
    body: Map<String, Value>,
}

impl SubmissionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(self, id: &str) -> Self {
        self.field("user_id", json!(id))
    }

    pub fn user_name(self, name: &str) -> Self {
        self.field("user_name", json!(name))
    }

    /// Slider-style answer: the value wrapped in a one-element array.
    pub fn slider(self, external: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.field(external, json!([value]))
    }

    /// Set every dictionary field to the same slider value.
    pub fn all_sliders(mut self, value: i64) -> Self {
        for external in FIELD_MAP.keys() {
            self = self.slider(external, value);
        }
        self
    }

    /// Arbitrary key/value, stored verbatim.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.body.insert(key.to_string(), value);
        self
    }

    pub fn record(self) -> SubmissionRecord {
        self.body
    }

    pub fn json(self) -> Value {
        Value::Object(self.body)
    }

    pub fn bytes(self) -> Vec<u8> {
        serde_json::to_vec(&self.json()).expect("a JSON map always serializes")
    }
}
