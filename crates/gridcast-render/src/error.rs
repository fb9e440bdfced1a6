//! Error type for the text rendering pipeline.

use std::fmt;

/// Error type for grid rendering operations.
///
/// An empty table (zero headers or zero rows) is not an error: rendering it
/// yields an empty artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The requested border style is not registered. Carries the requested
    /// name and the names the registry does know, for diagnostics.
    UnknownStyle { name: String, known: Vec<String> },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownStyle { name, known } => {
                write!(
                    f,
                    "unknown table style: {}. Available styles: {}",
                    name,
                    known.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}
