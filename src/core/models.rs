//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the verifier:
//! the outcome of a playbook execution, the per-playbook result record, and
//! the aggregated run report.
//!
//! 此模块定义了整个验证器中使用的核心数据结构：
//! playbook 执行的结果、每个 playbook 的结果记录以及聚合的运行报告。

use serde::{Deserialize, Serialize};

use crate::infra::t;

/// Sentinel value reported when a record carries no error text.
/// 当记录不携带错误文本时报告的哨兵值。
pub const NO_ERROR_SENTINEL: &str = "none";

/// The classified outcome of a single playbook execution.
///
/// `Indeterminate` covers runs that produced no definitive signal: no error
/// stream content and neither recap marker in standard output, as well as
/// launch-level faults and timeouts.
///
/// 单个 playbook 执行的分类结果。
///
/// `Indeterminate` 覆盖没有产生明确信号的运行：错误流无内容且标准输出中
/// 没有任何 recap 标记，以及启动级故障和超时。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The playbook ran and reported no failed tasks.
    /// playbook 运行且未报告失败任务。
    Passed,
    /// The runner produced error-stream content, or the recap reported a failure.
    /// runner 产生了错误流内容，或 recap 报告了失败。
    Failed,
    /// No definitive signal was found, or the runner could not be launched.
    /// 未找到明确信号，或 runner 无法启动。
    Indeterminate,
}

impl Outcome {
    /// Checks if the outcome counts as a failure for the exit status.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed)
    }

    /// Gets the outcome as a localized string for display.
    /// 以本地化字符串形式获取结果以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            Outcome::Passed => t!("report.status_passed", locale = locale).to_string(),
            Outcome::Failed => t!("report.status_failed", locale = locale).to_string(),
            Outcome::Indeterminate => {
                t!("report.status_indeterminate", locale = locale).to_string()
            }
        }
    }

    /// Gets the CSS class used for this outcome in the HTML report.
    pub fn status_class(&self) -> &'static str {
        match self {
            Outcome::Passed => "status-passed",
            Outcome::Failed => "status-failed",
            Outcome::Indeterminate => "status-indeterminate",
        }
    }
}

/// The structured result of one playbook execution. Exactly one record is
/// produced per discovered playbook, regardless of outcome; records are
/// immutable after creation.
///
/// 一次 playbook 执行的结构化结果。每个被发现的 playbook 恰好产生一条记录，
/// 无论结果如何；记录创建后不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Rotating display ID in {1, 2, 3, 4}, assigned at visitation time.
    /// Not a stable identifier.
    /// {1, 2, 3, 4} 范围内的轮转显示 ID，在访问时分配。不是稳定标识符。
    pub case_id: u32,
    /// The first path segment of the playbook's repository-relative path.
    /// playbook 仓库相对路径的第一个路径段。
    pub case_name: String,
    /// The playbook's file name with its extension stripped.
    /// 去掉扩展名的 playbook 文件名。
    pub sub_case_name: String,
    /// Description resolved via the case catalog.
    /// 通过用例目录解析出的描述。
    pub description: String,
    /// The classified outcome of the execution.
    /// 执行的分类结果。
    pub outcome: Outcome,
    /// Wall-clock time of the execution attempt, measured on every exit path.
    /// 执行尝试的墙钟时间，在每条退出路径上都会测量。
    pub duration_seconds: f64,
    /// Execution completion time, human-readable.
    /// 执行完成时间，人类可读。
    pub timestamp: String,
    /// Error text for failures and faults; the "none" sentinel otherwise.
    /// 失败和故障的错误文本；否则为 "none" 哨兵值。
    pub error_detail: String,
}

/// The aggregated result of a whole verification run.
/// 整个验证运行的聚合结果。
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// The records in traversal order.
    /// 按遍历顺序排列的记录。
    pub records: Vec<CaseReport>,
    /// Set when traversal did not complete (cancellation or a run-level fault).
    /// A partial report is flagged, never silently truncated.
    /// 当遍历未完成时设置（取消或运行级故障）。
    /// 部分报告会被标记，从不被静默截断。
    pub partial: bool,
    /// The run-level fault that interrupted traversal, if any.
    /// 中断遍历的运行级故障（如有）。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl RunReport {
    /// Builds a report for a traversal that visited the whole tree.
    pub fn complete(records: Vec<CaseReport>) -> Self {
        Self {
            records,
            partial: false,
            fault: None,
        }
    }

    /// Builds a report flagged as partial, keeping already-collected records.
    pub fn partial(records: Vec<CaseReport>, fault: Option<String>) -> Self {
        Self {
            records,
            partial: true,
            fault,
        }
    }

    /// Checks whether any record carries a failed outcome.
    pub fn has_failures(&self) -> bool {
        self.records.iter().any(|r| r.outcome.is_failure())
    }

    /// Counts the records with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.records.iter().filter(|r| r.outcome == outcome).count()
    }
}
