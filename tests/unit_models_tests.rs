//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for the outcome enum, the per-playbook result record, and the
//! aggregated run report.
//!
//! 结果枚举、每个 playbook 的结果记录以及聚合运行报告的测试。

use playbook_verifier::core::models::{CaseReport, NO_ERROR_SENTINEL, Outcome, RunReport};

fn record(case_id: u32, outcome: Outcome) -> CaseReport {
    CaseReport {
        case_id,
        case_name: "group1".to_string(),
        sub_case_name: "a".to_string(),
        description: "not available".to_string(),
        outcome,
        duration_seconds: 0.42,
        timestamp: "2026-08-27 12:00:00".to_string(),
        error_detail: NO_ERROR_SENTINEL.to_string(),
    }
}

#[test]
fn test_outcome_failure_flag() {
    assert!(Outcome::Failed.is_failure());
    assert!(!Outcome::Passed.is_failure());
    // Indeterminate outcomes do not fail the run by themselves.
    assert!(!Outcome::Indeterminate.is_failure());
}

#[test]
fn test_outcome_status_strings() {
    assert_eq!(Outcome::Passed.status_str("en"), "Passed");
    assert_eq!(Outcome::Failed.status_str("en"), "Failed");
    assert_eq!(Outcome::Indeterminate.status_str("en"), "Indeterminate");
    assert_eq!(Outcome::Passed.status_str("fr"), "Réussi");
}

#[test]
fn test_outcome_status_classes_are_distinct() {
    let classes = [
        Outcome::Passed.status_class(),
        Outcome::Failed.status_class(),
        Outcome::Indeterminate.status_class(),
    ];
    assert_eq!(
        classes.len(),
        classes.iter().collect::<std::collections::HashSet<_>>().len()
    );
}

#[test]
fn test_case_report_serialization() {
    let report = record(2, Outcome::Passed);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["case_id"], 2);
    assert_eq!(json["case_name"], "group1");
    assert_eq!(json["sub_case_name"], "a");
    assert_eq!(json["outcome"], "Passed");
    assert_eq!(json["error_detail"], "none");
}

#[test]
fn test_run_report_failure_detection() {
    let complete = RunReport::complete(vec![
        record(1, Outcome::Passed),
        record(2, Outcome::Indeterminate),
    ]);
    assert!(!complete.has_failures());
    assert!(!complete.partial);
    assert_eq!(complete.count(Outcome::Passed), 1);
    assert_eq!(complete.count(Outcome::Indeterminate), 1);

    let failing = RunReport::complete(vec![record(1, Outcome::Failed)]);
    assert!(failing.has_failures());
}

#[test]
fn test_partial_report_keeps_records_and_fault() {
    let partial = RunReport::partial(
        vec![record(1, Outcome::Passed)],
        Some("listing unavailable".to_string()),
    );
    assert!(partial.partial);
    assert_eq!(partial.records.len(), 1);
    assert_eq!(partial.fault.as_deref(), Some("listing unavailable"));

    let json = serde_json::to_value(&partial).unwrap();
    assert_eq!(json["partial"], true);
    assert_eq!(json["fault"], "listing unavailable");

    // A complete report omits the fault field entirely.
    let complete = RunReport::complete(vec![]);
    let json = serde_json::to_value(&complete).unwrap();
    assert!(json.get("fault").is_none());
}
