// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for Lanyard.

use thiserror::Error;

/// Top-level error type for all Lanyard operations.
#[derive(Debug, Error)]
pub enum LanyardError {
    // -- Argument validation --
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{name} out of range: {value} (minimum {min})")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
    },

    // -- Date / time --
    #[error("invalid format pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("parse failed: {0}")]
    Parse(String),

    // -- Strings --
    #[error("decode failed: {0}")]
    Decode(String),

    // -- JOSE --
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("token header rejected: {0}")]
    Token(String),

    // -- Persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LanyardError {
    /// Shorthand for [`LanyardError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LanyardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_argument() {
        let err = LanyardError::OutOfRange {
            name: "max_width",
            value: 2,
            min: 4,
        };
        assert_eq!(err.to_string(), "max_width out of range: 2 (minimum 4)");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LanyardError = io.into();
        assert!(matches!(err, LanyardError::Io(_)));
    }
}
