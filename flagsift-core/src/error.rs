//! Error types for flagsift-core

use std::fmt;

/// Errors raised while resolving column references and processing sources
#[derive(Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// A column label contained something other than A-Z letters
    InvalidColumnLabel { label: String },

    /// The source table is narrower than its configured flag column
    MissingFlagColumn { source: String, label: String },

    /// The source table is narrower than the widest configured keep column
    InsufficientColumns { source: String, label: String },

    /// The number of supplied tables does not match the configured sources
    SourceCountMismatch { expected: usize, got: usize },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumnLabel { label } => {
                write!(f, "invalid column label: '{label}'")
            }
            Self::MissingFlagColumn { source, label } => {
                write!(f, "{source}: flag column {label} not found in input")
            }
            Self::InsufficientColumns { source, label } => {
                write!(f, "{source}: input has too few columns, column {label} is required")
            }
            Self::SourceCountMismatch { expected, got } => {
                write!(f, "expected {expected} input tables, got {got}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}
