// ============================================================================
// 统计聚合：基于完整缓存计算各状态数量
// ============================================================================

use crate::models::dtos::Stats;
use crate::models::project::{Project, ProjectStatus};

/// 计算统计数据
///
/// `total` 为缓存大小；各状态字段统计小写状态等于字段名的记录数，
/// 未知状态只计入 `total`。
pub fn compute_stats(projects: &[Project]) -> Stats {
    projects.iter().fold(
        Stats {
            total: projects.len(),
            ..Stats::default()
        },
        |mut stats, project| {
            match project.status_kind() {
                Some(ProjectStatus::Proposal) => stats.proposal += 1,
                Some(ProjectStatus::Ongoing) => stats.ongoing += 1,
                Some(ProjectStatus::Completed) => stats.completed += 1,
                None => {}
            }
            stats
        },
    )
}

impl Stats {
    /// 指定状态的数量
    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Proposal => self.proposal,
            ProjectStatus::Ongoing => self.ongoing,
            ProjectStatus::Completed => self.completed,
        }
    }
}
