//! # Case Classifier Module / 用例分类模块
//!
//! This module maps the first path segment of a playbook's repository-relative
//! path to a human-readable test-case identity (description, ID label, numeric
//! ID). The lookup is a pure function over a fixed mapping: an unrecognized
//! name yields a fallback triple, never an error.
//!
//! 此模块将 playbook 仓库相对路径的第一个路径段映射到可读的测试用例标识
//! （描述、ID 标签、数字 ID）。查找是固定映射上的纯函数：
//! 无法识别的名称返回回退三元组，从不出错。

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::config::CaseEntry;

/// Description reported for an unrecognized case name.
/// 无法识别的用例名称所报告的描述。
pub const FALLBACK_DESCRIPTION: &str = "not available";

/// ID label reported for an unrecognized case name.
/// 无法识别的用例名称所报告的 ID 标签。
pub const FALLBACK_ID_LABEL: &str = "ID: N/A";

/// The built-in catalog, matching the top-level directories of the original
/// target repository.
/// 内置目录，与原始目标仓库的顶级目录相匹配。
static DEFAULT_ENTRIES: Lazy<Vec<CaseEntry>> = Lazy::new(|| {
    vec![
        entry(
            "Deploiement automatisé",
            "Automated deployment completed without human intervention.",
            1,
        ),
        entry(
            "Installation des tools DevOps",
            "DevOps tools installed and functional.",
            2,
        ),
        entry(
            "Integration des services",
            "Services interconnected and communicating effectively.",
            3,
        ),
        entry("Pratiques DevOps", "DevOps principles applied successfully.", 4),
    ]
});

fn entry(name: &str, description: &str, id: u32) -> CaseEntry {
    CaseEntry {
        name: name.to_string(),
        description: description.to_string(),
        id,
    }
}

/// The identity resolved for a case name.
/// 为用例名称解析出的标识。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInfo {
    pub description: String,
    pub id_label: String,
    pub numeric_id: u32,
}

/// A fixed mapping from top-level path segments to case identities.
/// 从顶级路径段到用例标识的固定映射。
#[derive(Debug, Clone)]
pub struct CaseCatalog {
    entries: HashMap<String, (String, u32)>,
}

impl CaseCatalog {
    /// Builds a catalog from explicit entries (e.g., from the suite config).
    /// 从显式条目（例如来自套件配置）构建目录。
    pub fn new(cases: &[CaseEntry]) -> Self {
        let entries = cases
            .iter()
            .map(|case| (case.name.clone(), (case.description.clone(), case.id)))
            .collect();
        Self { entries }
    }

    /// Returns the built-in entries, e.g. for seeding a generated config file.
    /// 返回内置条目，例如用于生成配置文件时的初始内容。
    pub fn default_entries() -> Vec<CaseEntry> {
        DEFAULT_ENTRIES.clone()
    }

    /// Resolves a case name to its identity. Total: unknown names resolve to
    /// the fallback triple instead of failing.
    /// 将用例名称解析为其标识。全函数：未知名称解析为回退三元组而不是失败。
    pub fn lookup(&self, case_name: &str) -> CaseInfo {
        match self.entries.get(case_name) {
            Some((description, id)) => CaseInfo {
                description: description.clone(),
                id_label: format!("ID: {}", id),
                numeric_id: *id,
            },
            None => CaseInfo {
                description: FALLBACK_DESCRIPTION.to_string(),
                id_label: FALLBACK_ID_LABEL.to_string(),
                numeric_id: 0,
            },
        }
    }
}

impl Default for CaseCatalog {
    fn default() -> Self {
        Self::new(&DEFAULT_ENTRIES)
    }
}
