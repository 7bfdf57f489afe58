//! # Suite Configuration Module / 套件配置模块
//!
//! This module defines the verification suite configuration, loaded from a
//! `PlaybookSuite.toml` file. It carries the repository identity, the local
//! clone location, the runner invocation, and the case catalog entries.
//! Secrets are never stored here; only the name of the environment variable
//! that holds the token is configured.
//!
//! 此模块定义验证套件配置，从 `PlaybookSuite.toml` 文件加载。
//! 它包含仓库标识、本地克隆位置、runner 调用方式和用例目录条目。
//! 机密信息从不存储在这里；只配置持有 token 的环境变量的名称。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::infra::t;

/// A single entry of the case catalog: maps a top-level directory name of the
/// target repository to a human-readable description and a numeric ID.
/// 用例目录的单个条目：将目标仓库的顶级目录名映射到可读描述和数字 ID。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaseEntry {
    /// The top-level path segment this entry matches.
    /// 此条目匹配的顶级路径段。
    pub name: String,
    /// Human-readable description shown in the report.
    /// 报告中显示的可读描述。
    pub description: String,
    /// The numeric ID associated with the case.
    /// 与用例关联的数字 ID。
    pub id: u32,
}

/// Represents the entire verification suite configuration, loaded from a TOML file.
/// 代表从 TOML 文件加载的整个验证套件配置。
#[derive(Debug, Deserialize, Serialize)]
pub struct SuiteConfig {
    /// The language for the tool's output messages (e.g., "en", "fr").
    /// Defaults to "en" if not specified.
    ///
    /// 工具输出消息的语言（例如 "en", "fr"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The repository to verify, either as "owner/name" (resolved against
    /// github.com) or as a full clone URL.
    /// 要验证的仓库，可以是 "owner/name"（解析为 github.com 地址）或完整的克隆 URL。
    pub repository: String,

    /// Local directory to clone into. Shell expansion (`~`, `$VAR`) is applied.
    /// When absent, a temporary directory is used and cleaned up afterwards.
    /// 克隆到的本地目录。应用 shell 展开（`~`、`$VAR`）。
    /// 缺省时使用临时目录，结束后自动清理。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_dir: Option<String>,

    /// The automation runner command line. Additional arguments may be embedded
    /// ("ansible-playbook -v"); the playbook path and the fixed local-target
    /// arguments are appended at execution time.
    /// 自动化 runner 命令行。可以内嵌额外参数（"ansible-playbook -v"）；
    /// playbook 路径和固定的本地目标参数在执行时追加。
    #[serde(default = "default_runner")]
    pub runner: String,

    /// Name of the environment variable holding the secret token passed to the
    /// runner as an extra variable. The value itself never lives in this file.
    /// 持有机密 token 的环境变量名称，token 作为额外变量传递给 runner。
    /// 其值本身从不出现在此文件中。
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Optional per-playbook timeout in seconds. An overrun is reported as an
    /// indeterminate outcome.
    /// 可选的单个 playbook 超时（秒）。超时被报告为不确定结果。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Tester identity shown in the report table.
    /// 报告表格中显示的测试者身份。
    #[serde(default = "default_tester")]
    pub tester: String,

    /// Case catalog entries. When empty, the built-in catalog is used.
    /// 用例目录条目。为空时使用内置目录。
    #[serde(default)]
    pub cases: Vec<CaseEntry>,
}

impl SuiteConfig {
    /// Resolves the configured repository to a clone URL. Values that already
    /// look like URLs (or scp-style git remotes) pass through unchanged.
    /// 将配置的仓库解析为克隆 URL。本身已是 URL（或 scp 风格 git 远端）的值原样通过。
    pub fn repository_url(&self) -> String {
        repository_url(&self.repository)
    }
}

pub fn repository_url(repository: &str) -> String {
    if repository.contains("://") || repository.starts_with("git@") {
        repository.to_string()
    } else {
        format!("https://github.com/{}.git", repository)
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_runner() -> String {
    "ansible-playbook".to_string()
}

fn default_token_env() -> String {
    "VAULT_TOKEN".to_string()
}

fn default_tester() -> String {
    "unknown".to_string()
}

/// Loads and parses the suite configuration from the given path.
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Returns
/// The parsed `SuiteConfig`, or an error with reading/parsing context
pub fn load_suite_config(path: &Path) -> Result<SuiteConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    let config: SuiteConfig =
        toml::from_str(&content).with_context(|| t!("config.parse_failed").to_string())?;
    Ok(config)
}
