//! Tests for the salary band analysis

use rstest::rstest;

use orgchart::application::services::{SalaryBandAnalyzer, SalaryDeviation, SalaryFinding};
use orgchart::config::SalaryBandConfig;
use orgchart::domain::{parse_records, EmployeeRegistry};
use orgchart::util::testing::{row, HEADER};

fn registry(rows: &[String]) -> EmployeeRegistry {
    parse_records(HEADER, rows).expect("valid rows")
}

fn lines(findings: &[SalaryFinding]) -> Vec<String> {
    findings.iter().map(ToString::to_string).collect()
}

#[test]
fn given_overpaid_manager_when_analyzing_then_reports_excess_over_upper_bound() {
    // Arrange: average 46000 → band 9200..=23000
    let registry = registry(&[
        row("123", "Joe", "Doe", 60000, ""),
        row("124", "Martin", "Chekov", 45000, "123"),
        row("125", "Bob", "Ronstad", 47000, "123"),
    ]);

    // Act
    let findings = SalaryBandAnalyzer::default().analyze(&registry);

    // Assert
    assert_eq!(
        findings,
        vec![SalaryFinding {
            manager_id: "123".to_string(),
            manager_name: "Joe Doe".to_string(),
            deviation: SalaryDeviation::Above(37000),
        }]
    );
    assert_eq!(lines(&findings), vec!["Joe Doe earns 37000 more than the threshold"]);
}

#[test]
fn given_underpaid_manager_when_analyzing_then_reports_shortfall_below_lower_bound() {
    // average 300000 → lower bound 60000
    let registry = registry(&[
        row("1", "Ada", "Root", 20000, ""),
        row("2", "Zed", "Wealthy", 300000, "1"),
    ]);

    let findings = SalaryBandAnalyzer::default().analyze(&registry);

    assert_eq!(lines(&findings), vec!["Ada Root earns 40000 less than the threshold"]);
}

#[rstest]
#[case::on_lower_bound(200, None)]
#[case::on_upper_bound(500, None)]
#[case::inside(350, None)]
#[case::just_below(199, Some("Ada Root earns 1 less than the threshold"))]
#[case::just_above(501, Some("Ada Root earns 1 more than the threshold"))]
fn given_manager_salary_near_bounds_when_analyzing_then_only_strict_violations_report(
    #[case] manager_salary: u32,
    #[case] expected: Option<&str>,
) {
    // Arrange: single report on 1000 → band 200..=500
    let registry = registry(&[
        row("1", "Ada", "Root", manager_salary, ""),
        row("2", "Ben", "Report", 1000, "1"),
    ]);

    // Act
    let findings = SalaryBandAnalyzer::default().analyze(&registry);

    // Assert
    assert_eq!(lines(&findings), expected.into_iter().map(String::from).collect::<Vec<_>>());
}

#[test]
fn given_uneven_salaries_when_analyzing_then_average_and_bounds_truncate() {
    // average (1001 + 1000 + 1000) / 3 = 1000, upper bound 500
    let registry = registry(&[
        row("1", "Ada", "Root", 501, ""),
        row("2", "Ben", "Report", 1001, "1"),
        row("3", "Cat", "Report", 1000, "1"),
        row("4", "Dan", "Report", 1000, "1"),
    ]);

    let findings = SalaryBandAnalyzer::default().analyze(&registry);

    assert_eq!(lines(&findings), vec!["Ada Root earns 1 more than the threshold"]);
}

#[test]
fn given_custom_band_when_analyzing_then_uses_configured_percentages() {
    let registry = registry(&[
        row("1", "Ada", "Root", 1200, ""),
        row("2", "Ben", "Report", 1000, "1"),
    ]);
    let analyzer = SalaryBandAnalyzer::new(SalaryBandConfig {
        lower_pct: 110,
        upper_pct: 150,
    });

    let findings = analyzer.analyze(&registry);

    assert!(findings.is_empty());
}

#[test]
fn given_unknown_manager_id_when_analyzing_then_group_is_skipped() {
    let registry = registry(&[
        row("1", "Ada", "Root", 500, ""),
        row("2", "Ben", "Orphan", 1000, "99"),
    ]);

    let findings = SalaryBandAnalyzer::default().analyze(&registry);

    assert!(findings.is_empty());
}

#[test]
fn given_several_managers_when_analyzing_then_findings_follow_first_seen_manager_order() {
    // Arrange
    let registry = registry(&[
        row("1", "Ada", "Root", 100000, ""),
        row("2", "Ben", "Mid", 90000, "1"),
        row("3", "Cat", "Leaf", 10000, "2"),
        row("4", "Dan", "Mid", 10000, "1"),
    ]);

    // Act
    let findings = SalaryBandAnalyzer::default().analyze(&registry);

    // Assert: Ada's reports average 50000 → upper 25000; Ben's report 10000 → upper 5000
    assert_eq!(
        lines(&findings),
        vec![
            "Ada Root earns 75000 more than the threshold",
            "Ben Mid earns 85000 more than the threshold",
        ]
    );
}

#[test]
fn given_manager_without_reports_when_analyzing_then_nothing_reported() {
    let registry = registry(&[row("1", "Ada", "Root", 1, "")]);

    assert!(SalaryBandAnalyzer::default().analyze(&registry).is_empty());
}
