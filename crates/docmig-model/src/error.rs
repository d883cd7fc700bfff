use thiserror::Error;

/// Errors raised while building documents from external data.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A field held a value that is not a scalar (array or nested object).
    #[error("unsupported field value: {kind} (documents must be flat)")]
    UnsupportedValue { kind: &'static str },

    /// The top-level JSON value was not an object.
    #[error("expected a JSON object, found {kind}")]
    NotAnObject { kind: &'static str },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
