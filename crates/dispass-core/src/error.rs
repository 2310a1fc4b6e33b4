//! Error types for DisPass core operations.
//!
//! Derivation itself never fails. These errors only surface from strict
//! validation (`LabelSpec::parse_strict`, `FromStr` impls) and from explicit
//! remapper lookups; the lenient APIs degrade to defaults instead.

use thiserror::Error;

/// Result type alias for DisPass operations.
pub type Result<T> = std::result::Result<T, DispassError>;

/// Core error type for DisPass operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispassError {
    /// Algorithm name is not one of the registered algorithms
    #[error("Invalid algorithm: {0} (expected one of dispass1, dispass2, dispass3)")]
    InvalidAlgorithm(String),

    /// Charset name is not one of the known tables
    #[error("Invalid charset: {0} (expected light or full)")]
    InvalidCharset(String),

    /// Numeric label field could not be parsed
    #[error("Malformed {field}: {value:?} (expected a positive integer)")]
    MalformedNumber { field: &'static str, value: String },

    /// Label is empty or otherwise unusable
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Remapper queried with a character it was not built from
    #[error("Character {0:?} is not part of the remapped string")]
    UnknownCharacter(char),
}
