use thiserror::Error;

/// Errors surfaced by the line codec.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("notification could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("malformed notification line: {0}")]
    Deserialize(#[source] serde_json::Error),
}
