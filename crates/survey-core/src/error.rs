//! Error taxonomy for a submission.
//!
//! Every variant ends up as the same generic failure on the wire. The variants
//! exist so the cause can be logged server-side.

/// Failure reported by a [`SurveyStore`](crate::store::SurveyStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the client could not be built.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// The store was reached but did not acknowledge the insert.
    #[error("insert failed: {0}")]
    Insert(String),

    /// The document could not be converted to the store's wire format.
    #[error("document encoding failed: {0}")]
    Encode(String),
}

/// Failure anywhere in the submit pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request body could not be read at all.
    #[error("request body unreadable: {0}")]
    Body(String),

    /// The body is not well-formed JSON.
    #[error("malformed request body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed JSON, but not an object.
    #[error("request body is a JSON {0}, expected an object")]
    NotAnObject(&'static str),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}
