// ============================================================================
// 处理器层：界面事件的唯一入口
// 负责：持有界面状态、调用 services、把错误转换为用户可见的提示
// ⛔ 禁止：让任何错误继续向上传播到界面之外
// ============================================================================

pub mod auth;
pub mod dashboard;

use crate::utils::error::AppError;

// ============================================================================
// 用户可见的提示文本
// ============================================================================

pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const MSG_SERVER_UNREACHABLE: &str = "Cannot connect to server. Make sure it's running.";

pub const MSG_FETCH_FAILED: &str = "Failed to load projects. Make sure the server is running.";
pub const MSG_PROJECT_ADDED: &str = "Project added successfully!";
pub const MSG_ADD_FAILED: &str = "Failed to add project. Please try again.";
pub const MSG_PROJECT_DELETED: &str = "Project deleted successfully!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete project. Please try again.";

pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 4 characters.";
pub const MSG_LOGIN_FAILED: &str = "Login failed.";
pub const MSG_REGISTRATION_FAILED: &str = "Registration failed.";
pub const MSG_ACCOUNT_CREATED: &str = "Account created! Redirecting to login...";

/// 远程调用失败时展示给用户的文本
///
/// - 网络错误：提示检查服务是否在运行
/// - 服务端错误且带 `error` 信息：原样展示
/// - 其他：使用调用方给出的通用提示
pub(crate) fn failure_message(err: &AppError, generic: &str) -> String {
    match err {
        AppError::NetworkError(_) => MSG_SERVER_UNREACHABLE.to_string(),
        _ => err
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| generic.to_string()),
    }
}
