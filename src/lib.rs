//! orgchart: management hierarchy reconstruction and analysis
//!
//! Reads a flat list of employees with manager references, rebuilds the
//! hierarchy below the CEO and reports
//! - managers paid outside a percentage band of their direct reports' average
//! - employees with too many managers between them and the CEO
//!
//! Layering: `domain` (entities, parser, hierarchy) → `application`
//! (analyses) → `infrastructure` (file input) → `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use application::services::{AnalysisReport, AnalysisService};
pub use config::Settings;
