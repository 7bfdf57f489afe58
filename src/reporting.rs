//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of verification reports in
//! multiple formats: a grid-formatted console table, a styled HTML report, and
//! a machine-readable JSON report.
//!
//! 此模块处理多种格式的验证报告生成和显示：
//! 网格格式的控制台表格、样式化的 HTML 报告以及机器可读的 JSON 报告。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::print_report;
pub use html::generate_html_report;
pub use json::write_json_report;
