//! Error types for the yijing-model crate.

use thiserror::Error;

/// Errors raised by figure construction and the string codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A figure string contained a character other than '0' or '1'.
    #[error("invalid symbol '{found}' at position {position}")]
    InvalidSymbol { found: char, position: usize },

    /// A figure-lines string must split into two equal halves.
    #[error("figure-lines string has odd length {len}")]
    OddLength { len: usize },

    /// The marks figure must have as many lines as the base figure.
    #[error("marks length {marks} does not match figure length {figure}")]
    LengthMismatch { figure: usize, marks: usize },

    /// A line index (after subtracting the index base) fell outside the figure.
    #[error("line {index} (base {index_base}) does not exist in a figure of {len} lines")]
    LineOutOfRange {
        index: usize,
        index_base: usize,
        len: usize,
    },

    /// The line-number token of a target string is not a non-negative integer.
    #[error("invalid line number: '{token}'")]
    InvalidLineNumber { token: String },

    /// A target string may carry at most two whitespace-separated fields.
    #[error("expected at most 2 fields in a target string, got {count}")]
    ExtraTokens { count: usize },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
