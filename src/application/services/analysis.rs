//! Analysis service
//!
//! Runs the full pipeline: parse records, build the hierarchy, then run the
//! salary band and reporting line analyses.

use tracing::{info, instrument};

use crate::application::services::reporting_line::{ReportingLineAnalyzer, ReportingLineFinding};
use crate::application::services::salary_band::{SalaryBandAnalyzer, SalaryFinding};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{parse_records, HierarchyBuilder};

/// Both reports of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub salary: Vec<SalaryFinding>,
    pub reporting_lines: Vec<ReportingLineFinding>,
}

impl AnalysisReport {
    pub fn salary_lines(&self) -> Vec<String> {
        self.salary.iter().map(ToString::to_string).collect()
    }

    pub fn reporting_line_lines(&self) -> Vec<String> {
        self.reporting_lines.iter().map(ToString::to_string).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.salary.is_empty() && self.reporting_lines.is_empty()
    }
}

/// Service running salary band and reporting line analyses over CSV rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisService {
    salary_band: SalaryBandAnalyzer,
    reporting_line: ReportingLineAnalyzer,
}

impl AnalysisService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            salary_band: SalaryBandAnalyzer::new(settings.salary_band),
            reporting_line: ReportingLineAnalyzer::new(settings.reporting_line),
        }
    }

    /// Analyse a header line and its data rows.
    ///
    /// Any parse or hierarchy error aborts the run before either analysis
    /// produces output.
    #[instrument(level = "debug", skip(self, rows))]
    pub fn run<I, S>(&self, header: &str, rows: I) -> ApplicationResult<AnalysisReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = parse_records(header, rows)?;
        let hierarchy = HierarchyBuilder::new().build(&registry)?;

        let (salary, reporting_lines) = rayon::join(
            || self.salary_band.analyze(&registry),
            || self.reporting_line.analyze(&hierarchy),
        );

        info!(
            employees = registry.len(),
            reachable = hierarchy.reachable_count(),
            salary_findings = salary.len(),
            reporting_line_findings = reporting_lines.len(),
            "analysis complete"
        );
        Ok(AnalysisReport {
            salary,
            reporting_lines,
        })
    }
}
