//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine-readable report output for CI systems that want to consume the
//! records rather than parse the console table.
//!
//! 面向 CI 系统的机器可读报告输出，供其直接消费记录而不是解析控制台表格。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::RunReport;
use crate::infra::t;

/// Serializes the run report, including the partial flag and run-level fault,
/// as pretty-printed JSON.
/// 将运行报告（包括部分标记和运行级故障）序列化为格式化的 JSON。
pub fn write_json_report(report: &RunReport, output_path: &Path) -> Result<()> {
    let payload = serde_json::to_string_pretty(report)
        .context(t!("report.json_serialize_failed").to_string())?;
    fs::write(output_path, payload).with_context(|| {
        t!("report.json_write_failed", path = output_path.display()).to_string()
    })?;
    Ok(())
}
