//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: materialize the working copy of
//! the target repository, walk its tree executing every playbook, render the
//! report, and derive the process exit status from the aggregated outcomes.
//!
//! 此模块实现 `run` 命令：物化目标仓库的工作副本，遍历其目录树执行每个
//! playbook，渲染报告，并根据聚合结果推导进程退出状态。

use anyhow::{Context, Result, anyhow};
use colored::*;
use std::{env, fs, path::PathBuf, time::Duration};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        classifier::CaseCatalog,
        config::{self, SuiteConfig},
        execution::RunnerSettings,
        models::RunReport,
        walker::{WalkStatus, Walker},
    },
    infra::{self, fs::LocalTree, t},
    reporting::{generate_html_report, print_report, write_json_report},
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `config` - Path to the suite configuration file
/// * `repository` - Optional repository override ("owner/name" or URL)
/// * `clone_dir` - Optional clone directory override
/// * `offline` - Reuse an existing clone instead of cloning
/// * `timeout` - Optional per-playbook timeout override, in seconds
/// * `html` - Optional path for HTML report output
/// * `json` - Optional path for JSON report output
///
/// # Returns
/// `Ok(())` when every playbook passed and the traversal completed; an error
/// (and thus a non-zero exit code) when any record failed or the run was partial.
pub async fn execute(
    config: PathBuf,
    repository: Option<String>,
    clone_dir: Option<PathBuf>,
    offline: bool,
    timeout: Option<u64>,
    html: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    let (suite, config_path) = setup_and_parse_config(&config)?;
    let locale = suite.language.clone();
    rust_i18n::set_locale(&locale);

    println!(
        "{}",
        t!("run.loading_config", locale = locale, path = config_path.display())
    );

    // CLI overrides take precedence over the configuration file.
    // CLI 覆盖优先于配置文件。
    let repository = repository.unwrap_or_else(|| suite.repository.clone());
    let clone_dir = clone_dir
        .map(|p| p.display().to_string())
        .or_else(|| suite.clone_dir.clone());
    let timeout = timeout.or(suite.timeout_secs);

    println!(
        "{}",
        t!("run.target_repository", locale = locale, repo = repository.yellow())
    );

    // The secret is only ever read from the environment.
    // 机密只从环境中读取。
    let token = env::var(&suite.token_env).ok().filter(|v| !v.is_empty());
    if token.is_none() {
        println!(
            "{}",
            t!("run.token_missing", locale = locale, var = suite.token_env).yellow()
        );
    }

    let (clone_root, _clone_guard) = if offline {
        let dir = clone_dir
            .ok_or_else(|| anyhow!(t!("run.offline_requires_clone_dir", locale = locale)))?;
        let root = infra::fs::resolve_existing_dir(&dir)?;
        println!(
            "{}",
            t!("run.offline_using_clone", locale = locale, path = root.display()).cyan()
        );
        (root, None)
    } else {
        let (root, guard) = infra::fs::prepare_clone_dir(clone_dir.as_deref())?;
        let url = config::repository_url(&repository);
        println!(
            "{}",
            t!("run.cloning_repository", locale = locale, url = url, path = root.display())
        );
        infra::fs::clone_repository(&url, &root).await?;
        (root, guard)
    };

    let stop = setup_signal_handler(&locale)?;

    let catalog = if suite.cases.is_empty() {
        CaseCatalog::default()
    } else {
        CaseCatalog::new(&suite.cases)
    };
    let settings = RunnerSettings {
        command: suite.runner.clone(),
        token,
        timeout: timeout.map(Duration::from_secs),
    };

    let source = LocalTree::new(clone_root.clone());
    let walker = Walker::new(&source, &clone_root, &catalog, &settings, stop, 0);
    let (records, status) = walker.run().await;

    let report = match status {
        WalkStatus::Complete => RunReport::complete(records),
        WalkStatus::Cancelled => {
            println!("{}", t!("run.cancelled", locale = locale).yellow());
            RunReport::partial(records, Some(t!("run.cancelled", locale = locale).to_string()))
        }
        WalkStatus::Faulted(fault) => {
            eprintln!(
                "{}",
                t!("run.traversal_fault", locale = locale, error = fault).red()
            );
            RunReport::partial(records, Some(fault))
        }
    };

    print_report(&report, &suite.tester, &locale);

    if let Some(report_path) = &html {
        if let Err(e) = generate_html_report(&report, &suite.tester, report_path, &locale) {
            eprintln!("{} {}", t!("report.html_failed", locale = locale).red(), e);
        } else {
            println!(
                "{}",
                t!("report.saved_html", locale = locale, path = report_path.display())
            );
        }
    }
    if let Some(report_path) = &json {
        write_json_report(&report, report_path)?;
        println!(
            "{}",
            t!("report.saved_json", locale = locale, path = report_path.display())
        );
    }

    if report.has_failures() {
        anyhow::bail!(t!(
            "run.failures_detected",
            locale = locale,
            count = report.records.iter().filter(|r| r.outcome.is_failure()).count()
        ));
    }
    if report.partial {
        anyhow::bail!(t!("run.partial_report", locale = locale));
    }
    println!("\n{}", t!("run.all_passed", locale = locale).green().bold());
    Ok(())
}

/// Sets up and parses the suite configuration file.
fn setup_and_parse_config(config_path_arg: &PathBuf) -> Result<(SuiteConfig, PathBuf)> {
    // For config parsing, we don't have the locale yet. Use English as a default.
    let locale = "en";
    let config_path = fs::canonicalize(config_path_arg).with_context(|| {
        t!("config.read_failed", locale = locale, path = config_path_arg.display()).to_string()
    })?;

    let suite = config::load_suite_config(&config_path)
        .with_context(|| t!("config.parse_failed", locale = locale).to_string())?;

    Ok((suite, config_path))
}

/// Sets up a signal handler for graceful shutdown: Ctrl-C stops traversal
/// between executions and the accumulated report is flagged as partial.
fn setup_signal_handler(locale: &str) -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let token_clone = token.clone();
    let locale = locale.to_string();

    tokio::spawn(async move {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl-C");
        println!("\n{}", t!("run.shutdown_signal", locale = &locale).yellow());
        token_clone.cancel();
    });

    Ok(token)
}
