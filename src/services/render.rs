// ============================================================================
// 渲染管线：把缓存/筛选/统计状态投影为视图模型
// 纯函数，不接触任何标记；所有用户文本在这里完成 HTML 转义
// ============================================================================

use time::macros::format_description;

use crate::models::dtos::{DeletePrompt, EmptyState, ProjectRow, StatCard, TableView};
use crate::models::project::{Project, ProjectStatus};
use crate::utils::text::{capitalize, escape_html, first_letter_upper, slugify};

/// 单条记录 → 表格行
pub fn project_row(project: &Project) -> ProjectRow {
    ProjectRow {
        id: project.id,
        initial: escape_html(&first_letter_upper(&project.student_name)),
        student_name: escape_html(&project.student_name),
        project_title: escape_html(&project.project_title),
        status: escape_html(&project.status),
        status_slug: slugify(&project.status),
        created_on: project
            .created_at
            .and_then(|at| at.format(format_description!("[year]-[month]-[day]")).ok()),
    }
}

/// 空列表占位：有筛选时提示切换卡片，无筛选时提示新增项目
pub fn empty_state(active: Option<ProjectStatus>) -> EmptyState {
    let (message, hint) = match active {
        Some(status) => (
            format!("No {} projects found", status.as_str()),
            r#"Click another status card or "Total Projects" to see all"#.to_string(),
        ),
        None => (
            "No projects found".to_string(),
            r#"Click "Add New Project" to get started"#.to_string(),
        ),
    };
    EmptyState {
        message: escape_html(&message),
        hint: escape_html(&hint),
    }
}

/// 表格标题
pub fn table_title(active: Option<ProjectStatus>) -> String {
    match active {
        Some(status) => format!("{} Projects", capitalize(status.as_str())),
        None => "All Projects".to_string(),
    }
}

/// 需要高亮的统计卡片：无筛选时高亮总数卡片
pub fn active_card(active: Option<ProjectStatus>) -> StatCard {
    match active {
        None => StatCard::Total,
        Some(ProjectStatus::Proposal) => StatCard::Proposal,
        Some(ProjectStatus::Ongoing) => StatCard::Ongoing,
        Some(ProjectStatus::Completed) => StatCard::Completed,
    }
}

/// 组装表格视图
///
/// # 参数
/// - `filtered`: 按状态筛选后的记录，决定是否显示空状态
/// - `visible`: 在 `filtered` 基础上经过关键字搜索的记录，决定实际显示的行
/// - `active`: 当前激活的筛选
pub fn render_table(
    filtered: &[&Project],
    visible: &[&Project],
    active: Option<ProjectStatus>,
) -> TableView {
    let empty_state = if filtered.is_empty() {
        Some(empty_state(active))
    } else {
        None
    };
    TableView {
        title: table_title(active),
        rows: visible.iter().map(|p| project_row(p)).collect(),
        empty_state,
    }
}

/// 删除确认弹窗内容
pub fn delete_prompt(id: i64, title: &str) -> DeletePrompt {
    DeletePrompt {
        id,
        message: escape_html(&format!("Are you sure you want to delete \"{}\"?", title)),
    }
}
