//! Error types

use thiserror::Error;

/// Raised when a mode identifier is not one of the fixed presets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode \"{id}\"")]
pub struct InvalidModeError {
    pub id: String,
}

impl InvalidModeError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
