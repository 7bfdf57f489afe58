//! # HTML Reporting Module / HTML 报告模块
//!
//! This module generates a styled, self-contained HTML report from a run
//! report: summary statistics, the partial-run banner when applicable, and the
//! full results table with the same column order as the console report.
//!
//! 此模块从运行报告生成样式化的独立 HTML 报告：
//! 摘要统计、适用时的部分运行横幅，以及与控制台报告列顺序相同的完整结果表格。

use anyhow::{Context, Result};
use maud::{DOCTYPE, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::core::models::{Outcome, RunReport};
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Generates an HTML report from a run report.
///
/// # Arguments / 参数
/// * `report` - The aggregated run report / 聚合的运行报告
/// * `tester` - The configured tester identity / 配置的测试者身份
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
/// * `locale` - The locale to use for the report labels
///              报告标签使用的语言环境
pub fn generate_html_report(
    report: &RunReport,
    tester: &str,
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }

                @if report.partial {
                    div class="partial-banner" {
                        (t!("report.partial_warning", locale = locale))
                        @if let Some(fault) = &report.fault {
                            ": " (fault)
                        }
                    }
                }

                div class="summary-container" {
                    div class="summary-item" {
                        span class="count" { (report.records.len()) }
                        span class="label" { (t!("html_report.summary.total", locale = locale)) }
                    }
                    div class="summary-item" {
                        span class="count passed-text" { (report.count(Outcome::Passed)) }
                        span class="label" { (t!("html_report.summary.passed", locale = locale)) }
                    }
                    div class="summary-item" {
                        span class="count failed-text" { (report.count(Outcome::Failed)) }
                        span class="label" { (t!("html_report.summary.failed", locale = locale)) }
                    }
                    div class="summary-item" {
                        span class="count indeterminate-text" { (report.count(Outcome::Indeterminate)) }
                        span class="label" { (t!("html_report.summary.indeterminate", locale = locale)) }
                    }
                }

                table {
                    thead {
                        tr {
                            th { (t!("report.header_id", locale = locale)) }
                            th { (t!("report.header_sub_case", locale = locale)) }
                            th { (t!("report.header_description", locale = locale)) }
                            th { (t!("report.header_case", locale = locale)) }
                            th { (t!("report.header_result", locale = locale)) }
                            th { (t!("report.header_duration", locale = locale)) }
                            th { (t!("report.header_date", locale = locale)) }
                            th { (t!("report.header_tester", locale = locale)) }
                            th { (t!("report.header_error", locale = locale)) }
                        }
                    }
                    tbody {
                        @for record in &report.records {
                            tr {
                                td { (record.case_id) }
                                td { (record.sub_case_name) }
                                td { (record.description) }
                                td { (record.case_name) }
                                td {
                                    span class=(record.outcome.status_class()) {
                                        (record.outcome.status_str(locale))
                                    }
                                }
                                td { (format!("{:.2}s", record.duration_seconds)) }
                                td { (record.timestamp) }
                                td { (tester) }
                                td { pre class="error-detail" { (record.error_detail) } }
                            }
                        }
                    }
                }
            }
        }
    };

    fs::write(output_path, markup.into_string()).with_context(|| {
        t!("report.html_write_failed", path = output_path.display()).to_string()
    })?;
    Ok(())
}
