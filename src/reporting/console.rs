//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders the verification report as a grid-formatted table in
//! the console: one row per result record, in traversal order, with a fixed
//! column order. An empty record list renders a header-only table; a partial
//! run is announced with a banner before the table.
//!
//! 此模块将验证报告渲染为控制台中的网格格式表格：
//! 每条结果记录一行，按遍历顺序排列，列顺序固定。
//! 空记录列表渲染仅含表头的表格；部分运行会在表格前用横幅标明。

use colored::*;

use crate::core::models::{Outcome, RunReport};
use crate::infra::t;

/// Column widths, in display characters: ID, sub-case, description, case name,
/// result, duration, timestamp, tester, error detail.
/// 各列宽度（显示字符数）：ID、子用例、描述、用例名、结果、持续时间、
/// 时间戳、测试者、错误详情。
const WIDTHS: [usize; 9] = [4, 18, 34, 26, 13, 9, 19, 14, 30];

/// Prints the full verification report to the console.
///
/// # Arguments / 参数
/// * `report` - The aggregated run report / 聚合的运行报告
/// * `tester` - The configured tester identity / 配置的测试者身份
/// * `locale` - The language locale to use for messages / 用于消息的语言区域设置
pub fn print_report(report: &RunReport, tester: &str, locale: &str) {
    println!("\n{}", t!("report.banner", locale = locale).bold());

    if report.partial {
        println!(
            "{}",
            t!("report.partial_warning", locale = locale).yellow().bold()
        );
        if let Some(fault) = &report.fault {
            println!(
                "{}",
                t!("report.partial_fault", locale = locale, error = fault).yellow()
            );
        }
    }

    let headers = [
        t!("report.header_id", locale = locale).to_string(),
        t!("report.header_sub_case", locale = locale).to_string(),
        t!("report.header_description", locale = locale).to_string(),
        t!("report.header_case", locale = locale).to_string(),
        t!("report.header_result", locale = locale).to_string(),
        t!("report.header_duration", locale = locale).to_string(),
        t!("report.header_date", locale = locale).to_string(),
        t!("report.header_tester", locale = locale).to_string(),
        t!("report.header_error", locale = locale).to_string(),
    ];

    print_separator();
    println!(
        "| {} |",
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| cell(h, WIDTHS[i]))
            .collect::<Vec<_>>()
            .join(" | ")
    );
    print_separator();

    for record in &report.records {
        let status_cell = cell(&record.outcome.status_str(locale), WIDTHS[4]);
        let status_colored = match record.outcome {
            Outcome::Passed => status_cell.green(),
            Outcome::Failed => status_cell.red(),
            Outcome::Indeterminate => status_cell.yellow(),
        };
        println!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
            cell(&record.case_id.to_string(), WIDTHS[0]),
            cell(&record.sub_case_name, WIDTHS[1]),
            cell(&record.description, WIDTHS[2]),
            cell(&record.case_name, WIDTHS[3]),
            status_colored,
            cell(&format!("{:.2}s", record.duration_seconds), WIDTHS[5]),
            cell(&record.timestamp, WIDTHS[6]),
            cell(tester, WIDTHS[7]),
            cell(&record.error_detail, WIDTHS[8]),
        );
    }
    print_separator();

    println!(
        "{}",
        t!(
            "report.totals",
            locale = locale,
            total = report.records.len(),
            passed = report.count(Outcome::Passed),
            failed = report.count(Outcome::Failed),
            indeterminate = report.count(Outcome::Indeterminate)
        )
    );
}

fn print_separator() {
    // Total width: cells plus "| " / " | " / " |" framing.
    // 总宽度：单元格加上 "| " / " | " / " |" 边框。
    let width: usize = WIDTHS.iter().sum::<usize>() + 3 * WIDTHS.len() + 1;
    println!("{}", "-".repeat(width));
}

/// Pads or truncates a value to its column width. Only the first line of a
/// multi-line value is shown; truncation is marked with an ellipsis. Counting
/// is per character, so accented case names keep the grid aligned.
/// 将值填充或截断到其列宽。多行值只显示第一行；截断用省略号标记。
/// 按字符计数，使带重音的用例名保持网格对齐。
fn cell(value: &str, width: usize) -> String {
    let first_line = value.lines().next().unwrap_or("");
    let chars: Vec<char> = first_line.chars().collect();
    if chars.len() <= width {
        let mut out = first_line.to_string();
        out.extend(std::iter::repeat_n(' ', width - chars.len()));
        out
    } else {
        let mut out: String = chars[..width.saturating_sub(3)].iter().collect();
        out.push_str("...");
        out
    }
}
