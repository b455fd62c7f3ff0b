//! Error types for payload generation.
//!
//! Only two things can go wrong: the caller gave us nothing to encode, or the
//! command string has shell quoting we cannot split.

use thiserror::Error;

/// Malformed shell quoting in a command string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated {quote} quote in command: {command}")]
    UnterminatedQuote { quote: char, command: String },

    #[error("trailing backslash in command: {command}")]
    TrailingEscape { command: String },
}

/// Top-level failures surfaced by the CLI.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
