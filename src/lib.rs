//! # Playbook Verifier Library / Playbook Verifier 库
//!
//! This library provides the core functionality for the Playbook Verifier tool,
//! a CI validation tool that discovers Ansible playbooks in a repository,
//! executes each one against a local synthetic target, and renders a tabular
//! test report.
//!
//! 此库为 Playbook Verifier 工具提供核心功能，
//! 这是一个 CI 验证工具：发现仓库中的 Ansible playbook，
//! 在本地合成目标上逐个执行，并渲染表格化的测试报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Case catalog, playbook execution engine, and tree walker
//! - `infra` - Infrastructure services like process capture and clone handling
//! - `reporting` - Console, HTML, and JSON report generation
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 用例目录、playbook 执行引擎和目录树遍历器
//! - `infra` - 基础设施服务，如进程捕获和克隆处理
//! - `reporting` - 控制台、HTML 和 JSON 报告生成
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::classifier;
pub use self::core::execution;
pub use self::core::models;
pub use self::core::walker;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the tool's user interface. It attempts to match the full
/// locale (e.g., "fr-FR"), then just the language code (e.g., "fr"), and
/// finally falls back to the default language ("en").
///
/// Returns the locale that was selected.
pub fn init() -> String {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "fr-FR")
    // Then try to match the language part only (e.g., "fr" from "fr-FR")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
            .to_string()
    };

    rust_i18n::set_locale(&lang);
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
