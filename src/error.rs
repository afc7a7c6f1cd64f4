use thiserror::Error;

/// Errors surfaced by the labyrinth engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Generator input that cannot produce a valid maze.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimension {
        width: u16,
        height: u16,
        reason: &'static str,
    },

    /// Malformed record in a persisted maze.
    #[error("format error at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// A maze that breaks the structural contract was handed to a consumer.
    #[error("maze invariant violated: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
