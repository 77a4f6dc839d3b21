//! Error types for store serialization.

use thiserror::Error;

use yijing_model::ModelError;

/// Errors raised when reading or writing a store document.
///
/// The two variants separate the failure classes a caller may want to
/// treat differently: the document not being the expected JSON shape at
/// all, and a single target string inside an otherwise well-formed
/// document failing its type-specific decode.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document is not valid JSON, or not the expected shape.
    #[error("invalid store document: {0}")]
    Json(#[from] serde_json::Error),

    /// A target string failed to decode; the channel key plus group and
    /// entry indices localize the first failure.
    #[error("invalid target in channel '{channel}', group {group}, entry {entry}: {source}")]
    Target {
        channel: &'static str,
        group: usize,
        entry: usize,
        #[source]
        source: ModelError,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
