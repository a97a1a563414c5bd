//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod parser;

pub use arena::{Hierarchy, HierarchyNode};
pub use builder::HierarchyBuilder;
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use parser::{parse_records, ColumnLayout, MAX_ROWS, REQUIRED_COLUMNS};
