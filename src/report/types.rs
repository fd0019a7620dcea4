//! Report error types.

use thiserror::Error;

/// Errors raised while rendering or writing a plan document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Content was added before the first page
    #[error("No page started")]
    NoPage,

    /// Nothing was rendered
    #[error("Document has no pages")]
    EmptyDocument,

    /// A table row does not match the header
    #[error("Table row has {found} cells, expected {expected}")]
    MalformedTable { expected: usize, found: usize },

    /// Failed to write the document
    #[error("Failed to write document: {0}")]
    WriteFailed(String),
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::WriteFailed(e.to_string())
    }
}
