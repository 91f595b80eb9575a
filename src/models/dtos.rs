// ============================================================================
// 数据传输对象（DTO）定义
// 渲染管线输出给界面的视图模型，仅包含字段定义和序列化派生
// ⛔ 禁止：包含复杂的业务逻辑方法
//
// 约定：视图模型中所有来自用户输入的字符串都已经过 HTML 转义，
// 展示层可以直接写入标记，不得再次转义。
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::project::ProjectStatus;

/// 新增/删除接口的成功响应，`message` 可能缺失
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// 按状态统计，始终基于完整缓存计算，与筛选无关
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub proposal: usize,
    pub ongoing: usize,
    pub completed: usize,
}

/// 表格中的一行
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectRow {
    pub id: i64,
    /// 学生姓名首字母（大写，已转义），用作头像
    pub initial: String,
    pub student_name: String,
    pub project_title: String,
    pub status: String,
    /// 状态 slug，用于样式类名 `status-{slug}`
    pub status_slug: String,
    /// 创建日期 `YYYY-MM-DD`，服务端未提供时为空
    pub created_on: Option<String>,
}

/// 可见列表为空时显示的占位信息
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmptyState {
    pub message: String,
    pub hint: String,
}

/// 表格视图：行列表或空状态
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TableView {
    /// 表格标题，如 "All Projects"、"Ongoing Projects"
    pub title: String,
    pub rows: Vec<ProjectRow>,
    /// 仅当筛选后的列表为空时存在
    pub empty_state: Option<EmptyState>,
}

/// 统计卡片
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatCard {
    Total,
    Proposal,
    Ongoing,
    Completed,
}

impl StatCard {
    /// 卡片对应的样式类名
    pub fn css_class(self) -> &'static str {
        match self {
            StatCard::Total => "stat-total",
            StatCard::Proposal => "stat-proposal",
            StatCard::Ongoing => "stat-ongoing",
            StatCard::Completed => "stat-completed",
        }
    }
}

/// 删除确认弹窗
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeletePrompt {
    pub id: i64,
    /// 确认提示文本（已转义）
    pub message: String,
}

/// 通知类型
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Info => "ℹ️",
        }
    }
}

/// 短暂显示的通知（toast），`message` 为原始文本，由展示层负责转义
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// 仪表盘的完整视图快照
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub table: TableView,
    pub stats: Stats,
    pub active_filter: Option<ProjectStatus>,
    pub active_card: StatCard,
    pub loading: bool,
    pub add_form_open: bool,
    pub submit_disabled: bool,
    pub delete_disabled: bool,
    pub pending_delete: Option<DeletePrompt>,
}

/// 侧边栏中的当前用户（已转义）
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserBadge {
    pub initials: String,
    pub full_name: String,
}

/// 登录/注册页面的视图状态
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AuthView {
    /// 已登录时的用户信息
    pub user: Option<UserBadge>,
    pub login_error: Option<String>,
    pub register_error: Option<String>,
    pub register_success: Option<String>,
    pub login_disabled: bool,
    pub register_disabled: bool,
}
