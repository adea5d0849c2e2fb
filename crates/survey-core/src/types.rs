//! Core types for survey-core.
//!
//! This module defines the data that flows through one submission: the raw
//! [`SubmissionRecord`] parsed from the request body, the [`CanonicalRecord`]
//! produced by the normalizer, and the persisted [`SurveyDocument`].

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Default subject identifier when the submission carries no `user_id`.
pub const DEFAULT_USER_ID: &str = "STU_001";

/// Default display name when the submission carries no `user_name`.
pub const DEFAULT_USER_NAME: &str = "Student Name";

/// A submission body as sent by the survey client.
///
/// Arbitrary string keys mapped to JSON values. Slider inputs arrive as
/// one-element arrays (`{"stress_week": [7]}`), other clients may send bare
/// scalars.
pub type SubmissionRecord = Map<String, Value>;

/// Survey answers keyed by canonical field name.
///
/// Always holds exactly one entry per field dictionary entry, in dictionary
/// order. Serializes as a JSON/BSON object in that same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalRecord {
    entries: Vec<(&'static str, Value)>,
}

impl CanonicalRecord {
    /// Value stored under a canonical field name.
    pub fn get(&self, canonical: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl FromIterator<(&'static str, Value)> for CanonicalRecord {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for CanonicalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The persisted form of one submission.
///
/// Built once per request and handed to the store; never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyDocument {
    pub user_id: String,
    pub user_name: String,
    /// Canonical survey payload consumed by downstream feature pipelines.
    pub survey_data: CanonicalRecord,
    /// Server-side creation time (UTC), set when the document is built.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
