//! Salary band analysis
//!
//! Flags managers whose salary falls outside a percentage window of their
//! direct reports' average salary.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, instrument};

use crate::config::SalaryBandConfig;
use crate::domain::{Employee, EmployeeRegistry};

/// Which side of the band a manager's salary falls on, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryDeviation {
    Below(u64),
    Above(u64),
}

/// A manager outside the allowed salary band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryFinding {
    pub manager_id: String,
    pub manager_name: String,
    pub deviation: SalaryDeviation,
}

impl fmt::Display for SalaryFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.deviation {
            SalaryDeviation::Below(amount) => write!(
                f,
                "{} earns {} less than the threshold",
                self.manager_name, amount
            ),
            SalaryDeviation::Above(amount) => write!(
                f,
                "{} earns {} more than the threshold",
                self.manager_name, amount
            ),
        }
    }
}

/// Bounds derived from the subordinates' average salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBand {
    pub average: u64,
    pub lower: u64,
    pub upper: u64,
}

impl SalaryBand {
    /// Truncating integer arithmetic throughout.
    pub fn from_salaries(salaries: &[u32], config: &SalaryBandConfig) -> Option<Self> {
        if salaries.is_empty() {
            return None;
        }
        let total: u64 = salaries.iter().map(|&s| u64::from(s)).sum();
        let average = total / salaries.len() as u64;
        Some(Self {
            average,
            lower: average * u64::from(config.lower_pct) / 100,
            upper: average * u64::from(config.upper_pct) / 100,
        })
    }

    /// Equality with a bound is inside the band.
    pub fn deviation(&self, salary: u32) -> Option<SalaryDeviation> {
        let salary = u64::from(salary);
        if salary < self.lower {
            Some(SalaryDeviation::Below(self.lower - salary))
        } else if salary > self.upper {
            Some(SalaryDeviation::Above(salary - self.upper))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryBandAnalyzer {
    config: SalaryBandConfig,
}

impl SalaryBandAnalyzer {
    pub fn new(config: SalaryBandConfig) -> Self {
        Self { config }
    }

    /// Group employees by manager id, in first-seen order.
    fn group_by_manager(registry: &EmployeeRegistry) -> Vec<(&str, Vec<&Employee>)> {
        let mut groups: Vec<(&str, Vec<&Employee>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for employee in registry {
            let Some(manager_id) = employee.manager_id.as_deref() else {
                continue;
            };
            let pos = *positions.entry(manager_id).or_insert_with(|| {
                groups.push((manager_id, Vec::new()));
                groups.len() - 1
            });
            groups[pos].1.push(employee);
        }
        groups
    }

    /// Findings in first-seen order of manager ids.
    ///
    /// Manager ids that match no employee are skipped.
    #[instrument(level = "debug", skip(self, registry))]
    pub fn analyze(&self, registry: &EmployeeRegistry) -> Vec<SalaryFinding> {
        let mut findings = Vec::new();

        for (manager_id, reports) in Self::group_by_manager(registry) {
            let Some(manager) = registry.get(manager_id) else {
                debug!(manager_id, "skipping unknown manager");
                continue;
            };
            let salaries: Vec<u32> = reports.iter().map(|e| e.salary).collect();
            let Some(band) = SalaryBand::from_salaries(&salaries, &self.config) else {
                continue;
            };

            if let Some(deviation) = band.deviation(manager.salary) {
                debug!(manager_id, ?band, ?deviation, "manager outside salary band");
                findings.push(SalaryFinding {
                    manager_id: manager.id.clone(),
                    manager_name: manager.full_name(),
                    deviation,
                });
            }
        }
        findings
    }
}
