// ============================================================================
// 展示适配层：把视图模型写成 HTML 片段
// 视图模型中的用户文本已转义，这里只做拼接；通知文本在这里转义
// ============================================================================

use std::fmt::Write;

use crate::models::dtos::{Notification, Stats, TableView};
use crate::utils::text::escape_html;

/// 每行入场动画的延迟步长（毫秒）
const ROW_ANIMATION_STEP_MS: usize = 50;

/// 表格列数（编号、学生、项目标题、状态、操作）
const TABLE_COLUMNS: usize = 5;

/// 渲染 `<tbody>` 的内容：有行时逐行输出，否则输出空状态行
pub fn render_tbody(table: &TableView) -> String {
    if table.rows.is_empty() {
        return match &table.empty_state {
            Some(empty) => format!(
                "<tr><td colspan=\"{}\" class=\"empty-state\"><div class=\"empty-icon\">📂</div><p>{}</p><span>{}</span></td></tr>",
                TABLE_COLUMNS, empty.message, empty.hint
            ),
            None => String::new(),
        };
    }

    let mut html = String::new();
    for (index, row) in table.rows.iter().enumerate() {
        // 写入 String 不会失败
        let _ = write!(
            html,
            concat!(
                "<tr class=\"fade-in\" style=\"animation-delay: {delay}ms\" data-id=\"{id}\">",
                "<td class=\"id-cell\">{id}</td>",
                "<td><div class=\"student-info\"><div class=\"avatar\">{initial}</div><span>{name}</span></div></td>",
                "<td class=\"project-title-cell\">{title}</td>",
                "<td><span class=\"status-badge status-{slug}\">{status}</span></td>",
                "<td><button class=\"btn-delete\" data-delete-id=\"{id}\" data-delete-title=\"{title}\" title=\"Delete project\">Delete</button></td>",
                "</tr>"
            ),
            delay = index * ROW_ANIMATION_STEP_MS,
            id = row.id,
            initial = row.initial,
            name = row.student_name,
            title = row.project_title,
            slug = row.status_slug,
            status = row.status,
        );
    }
    html
}

/// 渲染统计卡片中的数字
pub fn render_stats(stats: &Stats) -> String {
    format!(
        concat!(
            "<span id=\"stat-total\">{}</span>",
            "<span id=\"stat-proposal\">{}</span>",
            "<span id=\"stat-ongoing\">{}</span>",
            "<span id=\"stat-completed\">{}</span>"
        ),
        stats.total, stats.proposal, stats.ongoing, stats.completed
    )
}

/// 渲染一条通知（服务端返回的错误信息可能包含任意文本，必须转义）
pub fn render_toast(notification: &Notification) -> String {
    format!(
        "<div class=\"toast toast-{}\"><span class=\"toast-icon\">{}</span><span>{}</span></div>",
        notification.kind.as_str(),
        notification.kind.icon(),
        escape_html(&notification.message)
    )
}
