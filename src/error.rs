//! Error types for the harmonic matching engine

use std::fmt;

/// Errors that can occur while computing harmonic matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Key string does not name one of the 24 Camelot keys
    InvalidKey(String),

    /// BPM outside the supported range
    BpmOutOfRange(String),

    /// Malformed hex color passed to the contrast helper
    InvalidColor(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            EngineError::BpmOutOfRange(msg) => write!(f, "BPM out of range: {}", msg),
            EngineError::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
