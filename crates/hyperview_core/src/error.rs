//! Parse error types
//!
//! Raised when a shape or projection is named by a string that matches no
//! known variant (config files, command line, debug console).

use std::fmt;

/// Error type for name lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No shape with this identifier
    UnknownShape(String),
    /// No projection mode with this name
    UnknownProjection(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownShape(id) => write!(f, "Unknown shape: {}", id),
            ParseError::UnknownProjection(name) => write!(f, "Unknown projection mode: {}", name),
        }
    }
}

impl std::error::Error for ParseError {}
