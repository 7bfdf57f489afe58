//! # Tree Walker Module / 目录树遍历模块
//!
//! This module traverses the repository tree depth-first through the
//! `ContentSource` collaborator, executing every playbook file it finds and
//! collecting one result record per playbook. Per-playbook failures never stop
//! the walk; a listing fault or a cancellation stops further traversal but
//! preserves the records collected so far.
//!
//! 此模块通过 `ContentSource` 协作者对仓库目录树进行深度优先遍历，
//! 执行找到的每个 playbook 文件，并为每个 playbook 收集一条结果记录。
//! 单个 playbook 的失败永远不会停止遍历；列表故障或取消会停止后续遍历，
//! 但保留已收集的记录。

use anyhow::{Context, Result};
use colored::*;
use futures::future::LocalBoxFuture;
use std::path::Path;
use tokio_util::sync::CancellationToken;

use crate::core::classifier::CaseCatalog;
use crate::core::execution::{RunnerSettings, run_playbook};
use crate::core::models::CaseReport;
use crate::infra::t;

/// File extension identifying a playbook.
/// 标识 playbook 的文件扩展名。
pub const PLAYBOOK_EXT: &str = ".yml";

/// The rotation period of the display case ID.
/// 显示用例 ID 的轮转周期。
const CASE_ID_PERIOD: u32 = 4;

/// The kind of a repository tree entry.
/// 仓库目录树条目的类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One entry of a directory listing, with its repository-relative path.
/// 目录列表中的一个条目，带有其仓库相对路径。
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
}

/// The repository content collaborator: queried per-directory, lazily, as the
/// walker descends.
/// 仓库内容协作者：随着遍历器下降，按目录惰性查询。
pub trait ContentSource {
    fn list(&self, path: &str) -> Result<Vec<Entry>>;
}

/// How a traversal ended. Anything but `Complete` flags the report as partial.
/// 遍历的结束方式。除 `Complete` 之外的任何状态都将报告标记为部分。
#[derive(Debug, PartialEq, Eq)]
pub enum WalkStatus {
    Complete,
    Cancelled,
    Faulted(String),
}

/// Depth-first traversal over a repository tree, owning the rotation counter
/// and the shared results collection.
/// 对仓库目录树的深度优先遍历，持有轮转计数器和共享的结果集合。
pub struct Walker<'a> {
    source: &'a dyn ContentSource,
    clone_root: &'a Path,
    catalog: &'a CaseCatalog,
    settings: &'a RunnerSettings,
    stop: CancellationToken,
    case_id: u32,
    reports: Vec<CaseReport>,
}

impl<'a> Walker<'a> {
    pub fn new(
        source: &'a dyn ContentSource,
        clone_root: &'a Path,
        catalog: &'a CaseCatalog,
        settings: &'a RunnerSettings,
        stop: CancellationToken,
        rotation_seed: u32,
    ) -> Self {
        Self {
            source,
            clone_root,
            catalog,
            settings,
            stop,
            case_id: rotation_seed,
            reports: Vec::new(),
        }
    }

    /// Walks the whole tree starting from the root listing and returns the
    /// collected records together with how the traversal ended. Records
    /// collected before a fault or a cancellation are always returned.
    ///
    /// 从根列表开始遍历整个目录树，返回收集到的记录以及遍历的结束方式。
    /// 故障或取消之前收集的记录始终会被返回。
    pub async fn run(mut self) -> (Vec<CaseReport>, WalkStatus) {
        let initial_listing = match self.source.list("") {
            Ok(listing) => listing,
            Err(e) => return (self.reports, WalkStatus::Faulted(format!("{:#}", e))),
        };

        if initial_listing.is_empty() {
            println!("{}", t!("walk.empty_repository").yellow());
            return (self.reports, WalkStatus::Complete);
        }

        let status = match self.visit(initial_listing).await {
            Ok(()) if self.stop.is_cancelled() => WalkStatus::Cancelled,
            Ok(()) => WalkStatus::Complete,
            Err(e) => WalkStatus::Faulted(format!("{:#}", e)),
        };
        (self.reports, status)
    }

    /// Visits one listing: recurses into directories, executes playbook files,
    /// ignores everything else.
    /// 访问一个列表：递归进入目录，执行 playbook 文件，忽略其他所有内容。
    fn visit<'b>(&'b mut self, entries: Vec<Entry>) -> LocalBoxFuture<'b, Result<()>> {
        Box::pin(async move {
            for entry in entries {
                if self.stop.is_cancelled() {
                    return Ok(());
                }
                match entry.kind {
                    EntryKind::Dir => {
                        println!(
                            "{}",
                            t!("walk.directory_found", path = entry.path).cyan()
                        );
                        let sub_listing = self.source.list(&entry.path).with_context(|| {
                            t!("walk.listing_failed", path = entry.path).to_string()
                        })?;
                        self.visit(sub_listing).await?;
                    }
                    EntryKind::File if entry.name.ends_with(PLAYBOOK_EXT) => {
                        self.case_id = (self.case_id % CASE_ID_PERIOD) + 1;
                        let case_name = entry
                            .path
                            .split('/')
                            .next()
                            .unwrap_or(entry.path.as_str())
                            .to_string();
                        let playbook_path = self.clone_root.join(&entry.path);
                        let report = run_playbook(
                            &playbook_path,
                            self.case_id,
                            &case_name,
                            self.catalog,
                            self.settings,
                        )
                        .await;
                        self.reports.push(report);
                    }
                    EntryKind::File => {}
                }
            }
            Ok(())
        })
    }
}
