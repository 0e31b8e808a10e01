//! MT10x error types

use std::fmt;

use thiserror::Error;

/// Decomposition level at which a structural failure was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Outer block structure (`{1:}` .. `{5:}`)
    Message,
    /// Block 3 sub-tags
    UserHeader,
    /// Block 4 tagged fields
    Text,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Message => f.write_str("message"),
            Level::UserHeader => f.write_str("user header"),
            Level::Text => f.write_str("text block"),
        }
    }
}

/// MT10x parsing and validation errors
///
/// Parsing itself never returns these; they are recorded on the level that
/// failed and handed out by `error()` accessors, [`crate::parse_message`]
/// and the [`crate::validation`] functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Mt10xError {
    /// Empty or all-whitespace input
    #[error("Empty input")]
    EmptyInput,

    /// Input does not conform to the grammar of the given level
    #[error("Structural mismatch in {level}: {reason}")]
    StructuralMismatch {
        /// Level that failed to match
        level: Level,
        /// Human-readable description of the first offending position
        reason: String,
    },

    /// Settlement digits do not form a calendar date
    #[error("Invalid settlement date: year {year}, month {month}, day {day}")]
    InvalidDate {
        /// Full year (century already applied)
        year: i32,
        /// Month digits as found
        month: u32,
        /// Day digits as found
        day: u32,
    },

    /// Input exceeds the configured size limit
    #[error("Input too long: {len} bytes (limit {limit})")]
    InputTooLong {
        /// Length of the offending input in bytes
        len: usize,
        /// Configured limit
        limit: usize,
    },
}

impl Mt10xError {
    pub(crate) fn mismatch(level: Level, reason: impl Into<String>) -> Self {
        Mt10xError::StructuralMismatch {
            level,
            reason: reason.into(),
        }
    }
}

/// Result type alias using Mt10xError
pub type Result<T> = std::result::Result<T, Mt10xError>;
