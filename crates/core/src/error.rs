use thiserror::Error;

/// Result type for annotator operations
pub type Result<T> = std::result::Result<T, AnnotatorError>;

/// Errors a host integration can surface while resolving a target or
/// applying an edit. Classification itself has no failure mode.
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// Line index outside the buffer
    #[error("line {line} is out of range for a buffer of {line_count} lines")]
    LineOutOfRange { line: usize, line_count: usize },

    /// Selection bounds that do not describe a span
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AnnotatorError {
    /// Create an out-of-range error
    pub fn out_of_range(line: usize, line_count: usize) -> Self {
        Self::LineOutOfRange { line, line_count }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }
}
