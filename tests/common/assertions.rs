//! Domain-specific assertion macros for survey-intake harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! canonical field and show the whole record.

use serde_json::Value;
use survey_core::SurveyDocument;

/// The canonical payload of a document as plain JSON, for printing.
pub fn survey_json(document: &SurveyDocument) -> Value {
    serde_json::to_value(&document.survey_data).expect("canonical record serializes")
}

/// Assert that a document's canonical payload holds `value` under `name`.
///
/// ```rust
/// assert_canonical!(document, "stress_level", 7);
/// ```
#[macro_export]
macro_rules! assert_canonical {
    ($document:expr, $name:expr, $value:expr) => {{
        let document: &survey_core::SurveyDocument = &$document;
        let name: &str = $name;
        let expected = serde_json::json!($value);
        match document.survey_data.get(name) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_canonical! failed:\n  survey_data[{:?}]\n  expected: {}\n  actual:   {}",
                name, expected, actual
            ),
            None => panic!(
                "assert_canonical! failed: canonical field {:?} missing.\n  survey_data: {}",
                name,
                $crate::common::survey_json(document)
            ),
        }
    }};
}

/// Assert that every canonical field except those listed holds the default 0.
///
/// ```rust
/// assert_defaults_except!(document, ["stress_level"]);
/// ```
#[macro_export]
macro_rules! assert_defaults_except {
    ($document:expr, $except:expr) => {{
        let document: &survey_core::SurveyDocument = &$document;
        let except: &[&str] = &$except;
        for (name, value) in document.survey_data.iter() {
            if except.contains(&name) {
                continue;
            }
            pretty_assertions::assert_eq!(
                *value,
                serde_json::json!(0),
                "canonical field {:?} should default to 0",
                name
            );
        }
    }};
}

/// Assert the full document invariant: one entry per dictionary field, in
/// dictionary order.
#[macro_export]
macro_rules! assert_fully_populated {
    ($document:expr) => {{
        let document: &survey_core::SurveyDocument = &$document;
        let names: Vec<&str> = document.survey_data.names().collect();
        let expected: Vec<&str> = survey_core::normalizer::FIELD_MAP
            .values()
            .copied()
            .collect();
        pretty_assertions::assert_eq!(names, expected);
    }};
}
