use thiserror::Error;

/// Errors raised by buffer queries and range mutations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("Offset {offset} out of range (document length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Line {line} out of range ({count} lines)")]
    LineOutOfRange { line: usize, count: usize },

    #[error("Invalid range {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Invalid line number: {0}")]
    InvalidLine(usize),
}

/// Buffer result
pub type Result<T> = std::result::Result<T, BufferError>;
