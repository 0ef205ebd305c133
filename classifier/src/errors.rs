//! Classifier error types
//!
//! Classification itself never fails. These errors only surface when building
//! a custom rule chain or parsing a label back from text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A whole-word keyword could not be compiled into a boundary pattern
    #[error("invalid keyword {keyword:?}")]
    InvalidKeyword {
        keyword: String,
        #[source]
        source: regex::Error,
    },

    /// Text did not name one of the pattern labels
    #[error("unknown pattern label: {0}")]
    UnknownLabel(String),
}

/// Result type for classifier construction and parsing
pub type Result<T> = std::result::Result<T, ClassifierError>;
