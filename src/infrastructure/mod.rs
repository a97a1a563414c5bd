//! Infrastructure layer: I/O implementations
//!
//! Reads organisation records from disk and hands them to the application layer.

pub mod error;
pub mod source;

pub use error::{InfraError, InfraResult};
pub use source::{CsvFileSource, RecordInput, RecordSource};
