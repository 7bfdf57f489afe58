//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Playbook Verifier,
//! including the case catalog, configuration, playbook execution, and
//! repository tree traversal.
//!
//! 此模块包含 Playbook Verifier 的核心功能，
//! 包括用例目录、配置、playbook 执行和仓库目录树遍历。

pub mod classifier;
pub mod config;
pub mod execution;
pub mod models;
pub mod walker;

// Re-exports
pub use classifier::CaseCatalog;
pub use config::SuiteConfig;
pub use execution::run_playbook;
pub use models::{CaseReport, Outcome, RunReport};
pub use walker::Walker;
