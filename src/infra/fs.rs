//! # Working Copy Module / 工作副本模块
//!
//! This module materializes and serves the local working copy of the target
//! repository: preparing a clone directory, running the clone itself, and
//! exposing the cloned tree through the `ContentSource` collaborator used by
//! the walker.
//!
//! 此模块物化并提供目标仓库的本地工作副本：准备克隆目录、执行克隆本身，
//! 并通过遍历器使用的 `ContentSource` 协作者暴露克隆的目录树。

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::core::walker::{ContentSource, Entry, EntryKind};
use crate::infra::t;

/// Prepares a fresh directory to clone into.
///
/// With a configured path, any previous clone at that location is removed so
/// the run starts from a clean tree. Without one, a temporary directory is
/// created; the returned guard deletes it when dropped.
///
/// 准备一个用于克隆的全新目录。
///
/// 配置了路径时，该位置上的旧克隆会被删除，使运行从干净的目录树开始。
/// 未配置时创建临时目录；返回的 guard 在被丢弃时将其删除。
pub fn prepare_clone_dir(configured: Option<&str>) -> Result<(PathBuf, Option<TempDir>)> {
    match configured {
        Some(dir) => {
            let expanded = shellexpand::full(dir)
                .with_context(|| t!("fs.expand_failed", path = dir).to_string())?;
            let path = PathBuf::from(expanded.as_ref());
            if path.exists() {
                fs::remove_dir_all(&path).with_context(|| {
                    t!("fs.remove_failed", path = path.display()).to_string()
                })?;
            }
            Ok((path, None))
        }
        None => {
            let temp_dir = tempfile::Builder::new()
                .prefix("playbook-verifier-")
                .tempdir()
                .context(t!("fs.tempdir_failed").to_string())?;
            let path = temp_dir.path().to_path_buf();
            Ok((path, Some(temp_dir)))
        }
    }
}

/// Resolves an already-materialized clone directory (offline mode).
/// 解析已物化的克隆目录（离线模式）。
pub fn resolve_existing_dir(dir: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(dir)
        .with_context(|| t!("fs.expand_failed", path = dir).to_string())?;
    let path = fs::canonicalize(expanded.as_ref())
        .with_context(|| t!("fs.clone_dir_missing", path = expanded).to_string())?;
    if !path.is_dir() {
        bail!(t!("fs.clone_dir_missing", path = path.display()));
    }
    Ok(path)
}

/// Clones the repository into `dest` with a shallow `git clone`.
/// 使用浅 `git clone` 将仓库克隆到 `dest`。
pub async fn clone_repository(url: &str, dest: &Path) -> Result<()> {
    let status = tokio::process::Command::new("git")
        .arg("clone")
        .arg("--depth")
        .arg("1")
        .arg(url)
        .arg(dest)
        .status()
        .await
        .context(t!("fs.git_spawn_failed").to_string())?;

    if !status.success() {
        bail!(t!("fs.git_clone_failed", url = url));
    }
    Ok(())
}

/// Serves directory listings from the local working copy, one directory at a
/// time, as the walker descends. VCS metadata is not part of the tree.
///
/// 随着遍历器下降，从本地工作副本按目录提供列表。VCS 元数据不属于目录树。
#[derive(Debug, Clone)]
pub struct LocalTree {
    root: PathBuf,
}

impl LocalTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for LocalTree {
    fn list(&self, path: &str) -> Result<Vec<Entry>> {
        let dir = if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        };

        let mut entries = Vec::new();
        let read_dir = fs::read_dir(&dir)
            .with_context(|| t!("fs.listing_failed", path = dir.display()).to_string())?;
        for item in read_dir {
            let item = item
                .with_context(|| t!("fs.listing_failed", path = dir.display()).to_string())?;
            let name = item.file_name().to_string_lossy().into_owned();
            if name == ".git" {
                continue;
            }
            let rel_path = if path.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", path, name)
            };
            let kind = if item.file_type()?.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(Entry {
                name,
                path: rel_path,
                kind,
            });
        }

        // read_dir order is platform-dependent; sort for a deterministic walk.
        // read_dir 的顺序依赖平台；排序以获得确定性的遍历。
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
