// ============================================================================
// 项目缓存：最近一次拉取到的完整项目列表
// 只会被整体替换，不做增量合并；渲染以此为唯一数据源
// ============================================================================

use std::collections::HashSet;

use crate::models::project::Project;
use crate::services::remote_store::ProjectStore;
use crate::utils::error::AppResult;

#[derive(Debug, Default, Clone)]
pub struct ProjectCache {
    projects: Vec<Project>,
}

impl ProjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前快照，保持服务端返回顺序（id 降序）
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// 用新快照整体替换缓存
    pub fn replace(&mut self, snapshot: Vec<Project>) -> &[Project] {
        let mut seen = HashSet::with_capacity(snapshot.len());
        if let Some(dup) = snapshot.iter().find(|p| !seen.insert(p.id)) {
            log::warn!("项目列表中存在重复 id：{}", dup.id);
        }
        self.projects = snapshot;
        &self.projects
    }
}

/// 从远程存储拉取完整快照（不修改任何缓存）
///
/// 拆成独立函数是为了让调用方在 await 期间不持有缓存的可变借用，
/// 拉取失败时调用方的缓存保持原样。
pub async fn fetch_snapshot<S>(store: &S) -> AppResult<Vec<Project>>
where
    S: ProjectStore + ?Sized,
{
    let snapshot = store.list_projects().await?;
    log::debug!("拉取到 {} 个项目", snapshot.len());
    Ok(snapshot)
}
