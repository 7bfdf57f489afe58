//! # Playbook Execution Engine Module / Playbook 执行引擎模块
//!
//! This module runs a single playbook against the fixed synthetic target
//! (localhost, local connection) through the external automation runner,
//! captures its output streams, and classifies the run. Every invocation
//! produces exactly one result record; no failure mode escapes to the caller,
//! so one broken playbook can never abort the remaining traversal.
//!
//! 此模块通过外部自动化 runner，针对固定的合成目标（localhost，本地连接）
//! 运行单个 playbook，捕获其输出流并对运行进行分类。每次调用恰好产生一条
//! 结果记录；任何失败模式都不会逃逸给调用者，因此一个损坏的 playbook
//! 永远不会中止剩余的遍历。

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use colored::*;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::core::classifier::CaseCatalog;
use crate::core::models::{CaseReport, NO_ERROR_SENTINEL, Outcome};
use crate::infra::{command, t};

/// How the external runner is invoked for every playbook.
/// 每个 playbook 调用外部 runner 的方式。
#[derive(Debug, Clone)]
pub struct RunnerSettings {
    /// The runner command line; extra arguments may be embedded.
    /// runner 命令行；可内嵌额外参数。
    pub command: String,
    /// The secret passed to the runner as `VAULT_TOKEN`, when available.
    /// 可用时作为 `VAULT_TOKEN` 传递给 runner 的机密。
    pub token: Option<String>,
    /// Bounded wait per invocation; an overrun kills the child and yields an
    /// indeterminate outcome.
    /// 每次调用的有界等待；超时会杀死子进程并产生不确定结果。
    pub timeout: Option<Duration>,
}

/// Classifies a finished run from its captured streams.
///
/// Priority order: any error-stream content marks the run failed and becomes
/// the error detail; otherwise the `failed=0` / `failed=1` recap markers in
/// standard output decide; with no marker the run is indeterminate. A failure
/// signalled only by the stdout marker carries no error text.
///
/// 根据捕获的流对已结束的运行进行分类。
///
/// 优先级顺序：错误流的任何内容都将运行标记为失败并成为错误详情；
/// 否则由标准输出中的 `failed=0` / `failed=1` recap 标记决定；
/// 没有标记时运行结果不确定。仅由 stdout 标记表示的失败不携带错误文本。
pub fn classify_output(stdout: &str, stderr: &str) -> (Outcome, Option<String>) {
    if !stderr.is_empty() {
        (Outcome::Failed, Some(stderr.to_string()))
    } else if stdout.contains("failed=0") {
        (Outcome::Passed, None)
    } else if stdout.contains("failed=1") {
        (Outcome::Failed, None)
    } else {
        (Outcome::Indeterminate, None)
    }
}

/// Runs one playbook and produces its result record.
///
/// The record is constructed on every exit path: successful classification,
/// launch-level fault, and timeout all end here, with the duration measured
/// from the same start instant.
///
/// 运行一个 playbook 并产生其结果记录。
///
/// 记录在每条退出路径上构造：成功分类、启动级故障和超时都在这里结束，
/// 持续时间从同一起始时刻测量。
pub async fn run_playbook(
    playbook_path: &Path,
    case_id: u32,
    case_name: &str,
    catalog: &CaseCatalog,
    settings: &RunnerSettings,
) -> CaseReport {
    println!(
        "{}",
        t!("run.executing_playbook", path = playbook_path.display()).blue()
    );

    let start = Instant::now();

    let (outcome, detail) = match launch(playbook_path, settings).await {
        Ok(Some(capture)) => {
            if !capture.stdout.trim().is_empty() {
                println!(
                    "{}",
                    t!(
                        "run.playbook_stdout",
                        path = playbook_path.display(),
                        output = capture.stdout.trim()
                    )
                );
            }
            if !capture.stderr.trim().is_empty() {
                println!(
                    "{}",
                    t!(
                        "run.playbook_stderr",
                        path = playbook_path.display(),
                        output = capture.stderr.trim()
                    )
                    .red()
                );
            }
            classify_output(&capture.stdout, &capture.stderr)
        }
        Ok(None) => {
            // Bounded wait expired; the child was killed on drop.
            // 有界等待已到期；子进程在 drop 时被杀死。
            println!(
                "{}",
                t!("run.playbook_timeout", path = playbook_path.display()).yellow()
            );
            (
                Outcome::Indeterminate,
                Some(t!("run.playbook_timeout_message").to_string()),
            )
        }
        Err(fault) => {
            eprintln!(
                "{}",
                t!(
                    "run.launch_fault",
                    path = playbook_path.display(),
                    error = fault
                )
                .red()
            );
            (Outcome::Indeterminate, Some(fault.to_string()))
        }
    };

    let duration = start.elapsed();
    let info = catalog.lookup(case_name);
    let sub_case_name = playbook_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let status_line = t!(
        "run.playbook_done",
        path = playbook_path.display(),
        duration = format!("{:.2}", duration.as_secs_f64())
    );
    match outcome {
        Outcome::Passed => println!("{}", status_line.green()),
        Outcome::Failed => println!("{}", status_line.red()),
        Outcome::Indeterminate => println!("{}", status_line.yellow()),
    }

    CaseReport {
        case_id,
        case_name: case_name.to_string(),
        sub_case_name,
        description: info.description,
        outcome,
        duration_seconds: duration.as_secs_f64(),
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        error_detail: detail.unwrap_or_else(|| NO_ERROR_SENTINEL.to_string()),
    }
}

/// Launches the runner, applying the bounded wait when one is configured.
/// `Ok(None)` reports a timeout; `Err` reports a launch-level fault.
/// 启动 runner，在配置时应用有界等待。
/// `Ok(None)` 表示超时；`Err` 表示启动级故障。
async fn launch(
    playbook_path: &Path,
    settings: &RunnerSettings,
) -> Result<Option<command::Capture>> {
    let cmd = build_command(playbook_path, settings)?;
    let capture_future = command::spawn_and_capture(cmd);

    match settings.timeout {
        Some(limit) => match tokio::time::timeout(limit, capture_future).await {
            Ok(result) => Ok(Some(result.context(t!("run.runner_io_fault").to_string())?)),
            Err(_) => Ok(None),
        },
        None => Ok(Some(
            capture_future
                .await
                .context(t!("run.runner_io_fault").to_string())?,
        )),
    }
}

/// Builds the runner invocation for one playbook: the configured command line,
/// the playbook path, the secret as an extra variable, and the fixed synthetic
/// inventory with forced local connection.
/// 为一个 playbook 构建 runner 调用：配置的命令行、playbook 路径、
/// 作为额外变量的机密，以及强制本地连接的固定合成清单。
fn build_command(
    playbook_path: &Path,
    settings: &RunnerSettings,
) -> Result<tokio::process::Command> {
    let expanded = shellexpand::full(&settings.command)
        .with_context(|| t!("run.runner_expand_failed", command = settings.command).to_string())?
        .to_string();
    let parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow!(t!("run.runner_parse_failed", command = expanded)))?;
    if parts.is_empty() {
        return Err(anyhow!(t!("run.runner_empty_command")));
    }

    let mut cmd = tokio::process::Command::new(&parts[0]);
    cmd.args(&parts[1..]);
    cmd.arg(playbook_path);
    if let Some(token) = &settings.token {
        cmd.arg("--extra-vars").arg(format!("VAULT_TOKEN={}", token));
    }
    cmd.arg("-i").arg("localhost,").arg("--connection").arg("local");
    // The debug callback keeps the runner from emitting inventory warnings.
    // debug 回调可避免 runner 发出 inventory 警告。
    cmd.env("ANSIBLE_STDOUT_CALLBACK", "debug");
    cmd.kill_on_drop(true);
    Ok(cmd)
}
