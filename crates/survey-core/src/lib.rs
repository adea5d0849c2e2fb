//! survey-core — survey intake core library.
//!
//! This crate holds everything the intake service does that is not HTTP or a
//! specific database: the submission types, the static field dictionary and
//! normalizer, the store gateway trait, and configuration.
//!
//! # Flow
//!
//! ```text
//! body ──► parse ──► normalize ──► SurveyDocument ──► SurveyStore::insert_one
//! ```
//!
//! Nothing here keeps state between submissions.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod store;
pub mod submission;
pub mod types;

pub use error::{StoreError, SubmitError};
pub use store::{MemoryStore, SurveyStore};
pub use types::{CanonicalRecord, SubmissionRecord, SurveyDocument};
