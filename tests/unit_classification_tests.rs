//! # Execution Classification Unit Tests / 执行分类单元测试
//!
//! Tests for the outcome classification policy and for the executor's
//! no-propagation guarantee: every invocation, including launch faults and
//! timeouts, must reduce to a single result record.
//!
//! 结果分类策略以及执行器不传播保证的测试：
//! 每次调用（包括启动故障和超时）都必须归结为单条结果记录。

use std::path::Path;
use std::time::Duration;

use playbook_verifier::core::classifier::CaseCatalog;
use playbook_verifier::core::execution::{RunnerSettings, classify_output, run_playbook};
use playbook_verifier::core::models::Outcome;

fn settings(command: &str) -> RunnerSettings {
    RunnerSettings {
        command: command.to_string(),
        token: None,
        timeout: None,
    }
}

mod classify {
    use super::*;

    #[test]
    fn error_stream_content_wins_over_stdout_markers() {
        let (outcome, detail) = classify_output("PLAY RECAP ... failed=0", "boom\n");
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(detail.as_deref(), Some("boom\n"));
    }

    #[test]
    fn recap_marker_failed_zero_passes() {
        let (outcome, detail) =
            classify_output("PLAY RECAP *** localhost : ok=3 changed=1 failed=0", "");
        assert_eq!(outcome, Outcome::Passed);
        assert!(detail.is_none());
    }

    #[test]
    fn recap_marker_failed_one_fails_without_error_text() {
        // Per the classification policy, error detail only ever comes from the
        // error stream; a failure signalled by the stdout marker has none.
        let (outcome, detail) = classify_output("localhost : ok=2 failed=1", "");
        assert_eq!(outcome, Outcome::Failed);
        assert!(detail.is_none());
    }

    #[test]
    fn failed_zero_takes_priority_over_failed_one() {
        let (outcome, _) = classify_output("play1 failed=0\nplay2 failed=1", "");
        assert_eq!(outcome, Outcome::Passed);
    }

    #[test]
    fn no_marker_is_indeterminate() {
        let (outcome, detail) = classify_output("some unrelated output", "");
        assert_eq!(outcome, Outcome::Indeterminate);
        assert!(detail.is_none());

        let (outcome, _) = classify_output("", "");
        assert_eq!(outcome, Outcome::Indeterminate);
    }

    #[test]
    fn whitespace_only_stderr_still_fails() {
        // Any error-stream content counts, even a bare newline; it is kept
        // verbatim as the error detail.
        let (outcome, detail) = classify_output("PLAY RECAP failed=0", "\n");
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(detail.as_deref(), Some("\n"));
    }
}

mod execute {
    use super::*;

    #[tokio::test]
    async fn passing_run_produces_complete_record() {
        let catalog = CaseCatalog::default();
        let report = run_playbook(
            Path::new("site.yml"),
            3,
            "Pratiques DevOps",
            &catalog,
            &settings("echo failed=0"),
        )
        .await;

        assert_eq!(report.outcome, Outcome::Passed);
        assert_eq!(report.case_id, 3);
        assert_eq!(report.case_name, "Pratiques DevOps");
        assert_eq!(report.sub_case_name, "site");
        assert_eq!(report.description, "DevOps principles applied successfully.");
        assert_eq!(report.error_detail, "none");
        assert!(report.duration_seconds >= 0.0);
        assert!(!report.timestamp.is_empty());
    }

    #[tokio::test]
    async fn stdout_marker_failure_keeps_none_sentinel() {
        let catalog = CaseCatalog::default();
        let report = run_playbook(
            Path::new("group1/a.yml"),
            1,
            "group1",
            &catalog,
            &settings("echo failed=1"),
        )
        .await;

        assert_eq!(report.outcome, Outcome::Failed);
        assert_eq!(report.error_detail, "none");
        assert_eq!(report.description, "not available");
    }

    #[tokio::test]
    async fn error_stream_failure_carries_detail() {
        let catalog = CaseCatalog::default();
        let report = run_playbook(
            Path::new("site.yml"),
            1,
            "group1",
            &catalog,
            &settings("sh -c \"echo boom >&2\""),
        )
        .await;

        assert_eq!(report.outcome, Outcome::Failed);
        assert!(report.error_detail.contains("boom"));
    }

    #[tokio::test]
    async fn missing_runner_binary_is_indeterminate_not_an_error() {
        let catalog = CaseCatalog::default();
        let report = run_playbook(
            Path::new("site.yml"),
            2,
            "group1",
            &catalog,
            &settings("definitely-not-a-real-runner-binary-404"),
        )
        .await;

        assert_eq!(report.outcome, Outcome::Indeterminate);
        assert_ne!(report.error_detail, "none");
        assert!(report.duration_seconds >= 0.0);
    }

    #[tokio::test]
    async fn unparsable_runner_command_is_indeterminate() {
        let catalog = CaseCatalog::default();
        let report = run_playbook(
            Path::new("site.yml"),
            2,
            "group1",
            &catalog,
            // Unbalanced quote: shlex cannot split this.
            &settings("echo \"unterminated"),
        )
        .await;

        assert_eq!(report.outcome, Outcome::Indeterminate);
        assert_ne!(report.error_detail, "none");
    }

    #[tokio::test]
    async fn timeout_promotes_indeterminate_with_detail() {
        let catalog = CaseCatalog::default();
        let timed = RunnerSettings {
            command: "sleep 5".to_string(),
            token: None,
            timeout: Some(Duration::from_millis(200)),
        };
        let report = run_playbook(Path::new("site.yml"), 4, "group1", &catalog, &timed).await;

        assert_eq!(report.outcome, Outcome::Indeterminate);
        assert_ne!(report.error_detail, "none");
        // The bounded wait must have cut the run well before the sleep ended.
        assert!(report.duration_seconds < 5.0);
    }

    #[tokio::test]
    async fn token_is_forwarded_as_extra_var() {
        // The stub passes when its arguments contain the extra variable.
        let probe =
            "sh -c 'case \"$*\" in *VAULT_TOKEN=secret-token-value*) echo failed=0;; *) echo failed=1;; esac' sh";
        let catalog = CaseCatalog::default();

        let with_token = RunnerSettings {
            command: probe.to_string(),
            token: Some("secret-token-value".to_string()),
            timeout: None,
        };
        let report =
            run_playbook(Path::new("site.yml"), 1, "group1", &catalog, &with_token).await;
        assert_eq!(report.outcome, Outcome::Passed);

        let without_token = RunnerSettings {
            command: probe.to_string(),
            token: None,
            timeout: None,
        };
        let report =
            run_playbook(Path::new("site.yml"), 1, "group1", &catalog, &without_token).await;
        assert_eq!(report.outcome, Outcome::Failed);
    }
}
