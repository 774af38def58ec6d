//! Unified error types for kolour_engine

use thiserror::Error;

use crate::SelectionKind;

/// Main error type for document and command operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Programming errors ===
    /// A command or document primitive was called while the document was in
    /// a state its contract rules out. State is ambiguous afterwards; callers
    /// must not try to recover.
    #[error("Invariant violation: {message}")]
    InvariantViolation { message: String },

    // === Selection state ===
    #[error("Document has no selection")]
    NoSelection,

    #[error("Selection has no content")]
    SelectionHasNoContent,

    #[error("Selection already has content")]
    SelectionHasContent,

    #[error("Selection kind mismatch: expected {expected}, got {actual}")]
    SelectionKindMismatch { expected: SelectionKind, actual: SelectionKind },

    #[error("Invalid bounds: {message}")]
    InvalidBounds { message: String },

    // === Configuration ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for kolour_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation { message: message.into() }
    }

    pub fn invalid_bounds(message: impl Into<String>) -> Self {
        Self::InvalidBounds { message: message.into() }
    }

    pub fn config(msg: impl std::fmt::Display) -> Self {
        Self::Config { message: msg.to_string() }
    }

    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}
