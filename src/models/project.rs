// ============================================================================
// 项目记录模型
// 与后端 /projects、/add-project 接口的 JSON 结构一一对应
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::utils::error::{AppError, AppResult};

/// 项目记录，由服务端分配 `id` 与 `created_at`
///
/// `status` 保留服务端原始文本（可能是 "Ongoing"、"ongoing" 或未知值），
/// 比较时一律忽略大小写。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: i64,
    pub student_name: String,
    pub project_title: String,
    pub status: String,
    /// 无法解析为 RFC 3339 的时间戳按缺失处理，不影响整个列表的解析
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        serialize_with = "time::serde::rfc3339::option::serialize"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl Project {
    /// 将原始状态文本映射到已知状态（只转小写，不去除空白），未知状态返回 None
    pub fn status_kind(&self) -> Option<ProjectStatus> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| self.has_status(*status))
    }

    /// 状态是否等于指定值（忽略大小写）
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status.to_lowercase() == status.as_str()
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| OffsetDateTime::parse(&s, &Rfc3339).ok()))
}

/// 项目状态
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Proposal,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Proposal,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
    ];

    /// 小写标识，同时也是统计字段名与筛选键
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Proposal => "proposal",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
        }
    }

    /// 界面显示用的标签
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Proposal => "Proposal",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "proposal" => Ok(ProjectStatus::Proposal),
            "ongoing" => Ok(ProjectStatus::Ongoing),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(AppError::ValidationError(format!("未知的项目状态：{}", other))),
        }
    }
}

/// 新增项目请求体，对应 `POST /add-project`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewProject {
    pub student_name: String,
    pub project_title: String,
    pub status: String,
}

impl NewProject {
    /// 构造并校验新增项目请求：所有字段去除首尾空白后不能为空
    pub fn validated(student_name: &str, project_title: &str, status: &str) -> AppResult<Self> {
        let student_name = student_name.trim();
        let project_title = project_title.trim();
        let status = status.trim();

        let missing: Vec<&str> = [
            ("student_name", student_name),
            ("project_title", project_title),
            ("status", status),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::ValidationError(format!(
                "缺少必填字段：{}",
                missing.join(", ")
            )));
        }

        Ok(NewProject {
            student_name: student_name.to_string(),
            project_title: project_title.to_string(),
            status: status.to_string(),
        })
    }

    /// 记录是否与本次提交的字段一致（状态忽略大小写）
    pub fn matches(&self, project: &Project) -> bool {
        project.student_name == self.student_name
            && project.project_title == self.project_title
            && project.status.to_lowercase() == self.status.to_lowercase()
    }
}
