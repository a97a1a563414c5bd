//! Domain-level errors (no external dependencies)

use std::num::ParseIntError;

use itertools::Itertools;
use thiserror::Error;

/// Domain errors represent malformed organisation data.
/// Every variant aborts the analysis run; nothing is repaired.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("required headers not found in the input: {}", .missing.iter().join(", "))]
    Schema { missing: Vec<String> },

    #[error("more than {limit} lines in the input")]
    InputTooLarge { limit: usize },

    #[error("missing field for the employee at line {line}")]
    MissingField { line: usize },

    #[error("invalid salary '{value}' at line {line}")]
    SalaryFormat {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("there can't be more than one CEO in the input (second at line {line})")]
    MultipleRoots { line: usize },

    #[error("no CEO found: no employee without a manager")]
    NoRoot,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
