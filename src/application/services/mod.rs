//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod analysis;
mod reporting_line;
mod salary_band;

pub use analysis::{AnalysisReport, AnalysisService};
pub use reporting_line::{ReportingLineAnalyzer, ReportingLineFinding};
pub use salary_band::{SalaryBand, SalaryBandAnalyzer, SalaryDeviation, SalaryFinding};
