//! Tests for the reporting line analysis

use rstest::rstest;

use orgchart::application::services::ReportingLineAnalyzer;
use orgchart::config::ReportingLineConfig;
use orgchart::domain::{parse_records, EmployeeRegistry, HierarchyBuilder};
use orgchart::util::testing::{row, HEADER};

/// Chain of `len` employees, each managed by the previous one.
fn chain(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| {
            let manager = if i == 0 { String::new() } else { (i - 1).to_string() };
            row(&i.to_string(), &format!("E{i}"), "Chain", 1000, &manager)
        })
        .collect()
}

fn analyze(registry: &EmployeeRegistry, max_depth: usize) -> Vec<String> {
    let hierarchy = HierarchyBuilder::new().build(registry).unwrap();
    ReportingLineAnalyzer::new(ReportingLineConfig { max_depth })
        .analyze(&hierarchy)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn given_chain_of_six_when_analyzing_with_default_then_sixth_exceeds_by_one() {
    // Arrange: E5 has five managers above
    let registry = parse_records(HEADER, chain(6)).unwrap();

    // Act
    let lines = analyze(&registry, 4);

    // Assert
    assert_eq!(lines, vec!["Long reporting line for E5 Chain by 1 managers."]);
}

#[rstest]
#[case::within_limit(5, 4, 0)]
#[case::one_over(6, 4, 1)]
#[case::three_over(8, 4, 3)]
#[case::zero_depth(3, 0, 2)]
fn given_chain_when_analyzing_then_every_node_past_the_limit_is_reported(
    #[case] len: usize,
    #[case] max_depth: usize,
    #[case] expected_findings: usize,
) {
    let registry = parse_records(HEADER, chain(len)).unwrap();

    let lines = analyze(&registry, max_depth);

    assert_eq!(lines.len(), expected_findings);
}

#[test]
fn given_default_analyzer_when_analyzing_then_max_depth_is_four() {
    let registry = parse_records(HEADER, chain(6)).unwrap();
    let hierarchy = HierarchyBuilder::new().build(&registry).unwrap();

    let findings = ReportingLineAnalyzer::default().analyze(&hierarchy);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].employee_id, "5");
    assert_eq!(findings[0].excess, 1);
}

#[test]
fn given_wide_tree_when_analyzing_then_findings_are_in_breadth_first_order() {
    // Arrange: two deep branches below the root
    let registry = parse_records(
        HEADER,
        vec![
            row("r", "Root", "Boss", 1000, ""),
            row("a", "A", "Left", 1000, "r"),
            row("b", "B", "Right", 1000, "r"),
            row("a1", "A1", "Left", 1000, "a"),
            row("b1", "B1", "Right", 1000, "b"),
            row("a2", "A2", "Left", 1000, "a1"),
            row("b2", "B2", "Right", 1000, "b1"),
        ],
    )
    .unwrap();

    // Act
    let lines = analyze(&registry, 1);

    // Assert
    assert_eq!(
        lines,
        vec![
            "Long reporting line for A1 Left by 1 managers.",
            "Long reporting line for B1 Right by 1 managers.",
            "Long reporting line for A2 Left by 2 managers.",
            "Long reporting line for B2 Right by 2 managers.",
        ]
    );
}

#[test]
fn given_deep_but_unreachable_branch_when_analyzing_then_not_reported() {
    // Arrange: x0 reports to a missing manager, its chain is never visited
    let mut rows = vec![row("r", "Root", "Boss", 1000, "")];
    rows.push(row("x0", "X0", "Lost", 1000, "missing"));
    for i in 1..8 {
        rows.push(row(&format!("x{i}"), &format!("X{i}"), "Lost", 1000, &format!("x{}", i - 1)));
    }
    let registry = parse_records(HEADER, rows).unwrap();

    // Act
    let lines = analyze(&registry, 1);

    // Assert
    assert!(lines.is_empty());
}
