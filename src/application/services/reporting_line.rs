//! Reporting line analysis
//!
//! Flags employees with too many managers between them and the CEO.

use std::fmt;

use tracing::{debug, instrument};

use crate::config::ReportingLineConfig;
use crate::domain::Hierarchy;

/// An employee whose reporting line is longer than allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingLineFinding {
    pub employee_id: String,
    pub employee_name: String,
    /// Managers above the allowed maximum
    pub excess: usize,
}

impl fmt::Display for ReportingLineFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Long reporting line for {} by {} managers.",
            self.employee_name, self.excess
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportingLineAnalyzer {
    config: ReportingLineConfig,
}

impl ReportingLineAnalyzer {
    pub fn new(config: ReportingLineConfig) -> Self {
        Self { config }
    }

    /// Findings in breadth-first order from the root.
    ///
    /// Only employees reachable from the root are considered.
    #[instrument(level = "debug", skip(self, hierarchy), fields(max_depth = self.config.max_depth))]
    pub fn analyze(&self, hierarchy: &Hierarchy<'_>) -> Vec<ReportingLineFinding> {
        let max_depth = self.config.max_depth;
        let findings: Vec<ReportingLineFinding> = hierarchy
            .iter_breadth_first()
            .filter(|&(_, _, managers_above)| managers_above > max_depth)
            .map(|(_, node, managers_above)| ReportingLineFinding {
                employee_id: node.employee.id.clone(),
                employee_name: node.employee.full_name(),
                excess: managers_above - max_depth,
            })
            .collect();
        debug!(findings = findings.len(), "reporting lines analysed");
        findings
    }
}
