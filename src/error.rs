//! The single error type for the crate.
//!
//! Configuration, parsing and I/O failures are reported before mining starts.
//! `InvariantViolation` is the only variant the mining loop itself can raise,
//! and it always means a bug: the run is aborted instead of emitting counts
//! that may be wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CooccurError {
    #[error("Invalid configuration: `{parameter}` must be a positive integer, got {value}")]
    InvalidConfig { parameter: &'static str, value: usize },

    #[error("Parse error on line {line}: cannot read `{token}` as an item")]
    Parse { line: usize, token: String },

    #[error("Input too large: {count} {what} exceed the limit of {limit}")]
    TooLarge {
        what: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("Internal logic error (this is a bug): {0}")]
    InvariantViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CooccurError>;
