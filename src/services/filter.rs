// ============================================================================
// 筛选引擎
// 纯函数：根据当前筛选状态从缓存中派生可见子集，不修改输入
// ============================================================================

use crate::models::project::{Project, ProjectStatus};

/// 按状态筛选
///
/// - `active` 为 None：返回完整列表，顺序不变
/// - 否则返回状态（忽略大小写）等于筛选值的子序列，相对顺序不变
pub fn apply_filter(projects: &[Project], active: Option<ProjectStatus>) -> Vec<&Project> {
    match active {
        None => projects.iter().collect(),
        Some(status) => projects.iter().filter(|p| p.has_status(status)).collect(),
    }
}

/// 按关键字搜索：编号、学生姓名、项目标题、状态中任一包含关键字（忽略大小写）
///
/// 空关键字（或只有空白）时原样返回。
pub fn apply_search<'a>(projects: Vec<&'a Project>, query: &str) -> Vec<&'a Project> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return projects;
    }
    projects
        .into_iter()
        .filter(|p| {
            p.id.to_string().contains(&query)
                || p.student_name.to_lowercase().contains(&query)
                || p.project_title.to_lowercase().contains(&query)
                || p.status.to_lowercase().contains(&query)
        })
        .collect()
}

/// 当前筛选状态：最多一个激活的状态
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    active: Option<ProjectStatus>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ProjectStatus> {
        self.active
    }

    /// 选择筛选：再次选择当前激活的状态会清除筛选
    pub fn select(&mut self, requested: ProjectStatus) -> Option<ProjectStatus> {
        self.active = if self.active == Some(requested) {
            None
        } else {
            Some(requested)
        };
        self.active
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project(id: i64, status: &str) -> Project {
        Project {
            id,
            student_name: format!("Student {}", id),
            project_title: format!("Title {}", id),
            status: status.to_string(),
            created_at: None,
        }
    }

    fn scenario_cache() -> Vec<Project> {
        vec![
            project(3, "Ongoing"),
            project(2, "Completed"),
            project(1, "Proposal"),
        ]
    }

    #[test]
    fn test_apply_filter_none_returns_all_in_order() {
        let cache = scenario_cache();
        let ids: Vec<i64> = apply_filter(&cache, None).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_apply_filter_case_insensitive() {
        let cache = scenario_cache();
        let visible = apply_filter(&cache, Some(ProjectStatus::Ongoing));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }

    #[test]
    fn test_apply_filter_no_match_is_empty() {
        let cache = vec![project(1, "archived")];
        assert!(apply_filter(&cache, Some(ProjectStatus::Completed)).is_empty());
    }

    #[test]
    fn test_select_toggles() {
        let mut filter = FilterState::new();
        assert_eq!(filter.select(ProjectStatus::Ongoing), Some(ProjectStatus::Ongoing));
        assert_eq!(filter.select(ProjectStatus::Completed), Some(ProjectStatus::Completed));
        assert_eq!(filter.select(ProjectStatus::Completed), None);
        assert_eq!(filter.active(), None);
    }

    #[test]
    fn test_clear() {
        let mut filter = FilterState::new();
        filter.select(ProjectStatus::Proposal);
        filter.clear();
        assert_eq!(filter.active(), None);
    }

    #[test]
    fn test_apply_search_matches_any_field() {
        let cache = vec![
            Project {
                id: 12,
                student_name: "Maria Santos".to_string(),
                project_title: "Smart Irrigation".to_string(),
                status: "Ongoing".to_string(),
                created_at: None,
            },
            project(7, "Proposal"),
        ];
        let all = apply_filter(&cache, None);

        assert_eq!(apply_search(all.clone(), "SANTOS").len(), 1);
        assert_eq!(apply_search(all.clone(), "irrig").len(), 1);
        assert_eq!(apply_search(all.clone(), "proposal")[0].id, 7);
        assert_eq!(apply_search(all.clone(), "12")[0].id, 12);
        assert_eq!(apply_search(all.clone(), "   ").len(), 2);
        assert!(apply_search(all, "zzz").is_empty());
    }

    // ========================================================================
    // 属性测试
    // ========================================================================

    fn status_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Proposal".to_string()),
            Just("ongoing".to_string()),
            Just("COMPLETED".to_string()),
            Just("Completed".to_string()),
            "[a-z]{0,8}",
        ]
    }

    /// 生成 id 唯一且降序的缓存
    fn cache_strategy() -> impl Strategy<Value = Vec<Project>> {
        prop::collection::vec(status_strategy(), 0..30).prop_map(|statuses| {
            let n = statuses.len() as i64;
            statuses
                .into_iter()
                .enumerate()
                .map(|(i, status)| project(n - i as i64, &status))
                .collect()
        })
    }

    fn filter_strategy() -> impl Strategy<Value = Option<ProjectStatus>> {
        prop_oneof![
            Just(None),
            Just(Some(ProjectStatus::Proposal)),
            Just(Some(ProjectStatus::Ongoing)),
            Just(Some(ProjectStatus::Completed)),
        ]
    }

    fn status_only_strategy() -> impl Strategy<Value = ProjectStatus> {
        prop::sample::select(ProjectStatus::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// 筛选结果是缓存的保序子序列；无筛选时与缓存完全相同
        #[test]
        fn prop_filter_is_order_preserving_subsequence(
            cache in cache_strategy(),
            active in filter_strategy()
        ) {
            let visible = apply_filter(&cache, active);

            let mut cursor = cache.iter();
            for p in &visible {
                prop_assert!(cursor.any(|c| c.id == p.id), "结果不是缓存的保序子序列");
            }

            if active.is_none() {
                prop_assert_eq!(visible.len(), cache.len());
                for (v, c) in visible.iter().zip(cache.iter()) {
                    prop_assert_eq!(*v, c);
                }
            } else {
                let status = active.unwrap();
                prop_assert!(visible.iter().all(|p| p.has_status(status)));
                let expected = cache.iter().filter(|p| p.has_status(status)).count();
                prop_assert_eq!(visible.len(), expected);
            }
        }

        /// 相同参数重复筛选结果一致，且不修改输入
        #[test]
        fn prop_filter_is_idempotent(
            cache in cache_strategy(),
            active in filter_strategy()
        ) {
            let before = cache.clone();
            let first: Vec<Project> = apply_filter(&cache, active).into_iter().cloned().collect();
            let second: Vec<Project> = apply_filter(&cache, active).into_iter().cloned().collect();
            prop_assert_eq!(first, second);
            prop_assert_eq!(before, cache);
        }

        /// 任意状态下，连续两次选择同一状态都会回到未筛选
        #[test]
        fn prop_select_twice_clears(
            initial in prop::option::of(status_only_strategy()),
            requested in status_only_strategy()
        ) {
            let mut filter = FilterState::new();
            if let Some(s) = initial {
                filter.select(s);
            }
            filter.select(requested);
            filter.select(requested);
            if initial == Some(requested) {
                // 初始已激活：第一次清除，第二次重新激活
                prop_assert_eq!(filter.active(), Some(requested));
            } else {
                prop_assert_eq!(filter.active(), None);
            }
        }

        /// 从未筛选状态出发，选择两次同一状态回到 None
        #[test]
        fn prop_select_is_involution_from_none(requested in status_only_strategy()) {
            let mut filter = FilterState::new();
            filter.select(requested);
            filter.select(requested);
            prop_assert_eq!(filter.active(), None);
        }
    }
}
