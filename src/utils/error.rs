// ============================================================================
// 统一错误类型定义
// 使用 thiserror 派生宏，覆盖本地校验、网络、服务端三类错误
// ============================================================================

use thiserror::Error;

/// 应用统一错误枚举
///
/// 所有错误都在 commands 层（处理器边界）被捕获并转换为通知，
/// 不会继续向上传播。通过 `impl From<AppError> for String`
/// 保持与前端字符串错误的兼容性。
#[derive(Debug, Error)]
pub enum AppError {
    /// 参数验证失败（如学生姓名为空、密码过短），不会发起网络请求
    #[error("验证失败：{0}")]
    ValidationError(String),

    /// 请求无法发送或未完成（服务不可达、超时）
    #[error("网络错误：{0}")]
    NetworkError(String),

    /// 服务端返回非 2xx 状态码，`message` 为响应体中的 `error` 字段（若存在）
    #[error("服务端错误：HTTP {status}")]
    ServerError { status: u16, message: Option<String> },

    /// 2xx 响应但响应体不是预期的 JSON 结构
    #[error("响应解析失败：{0}")]
    DecodeError(String),

    /// 本地文件读写失败（如配置文件不存在）
    #[error("IO 错误：{0}")]
    IoError(#[from] std::io::Error),

    /// 删除操作未经确认
    #[error("删除操作未确认")]
    NotConfirmed,

    /// 触发该操作的控件已有请求在进行中
    #[error("操作进行中，请稍候")]
    Busy,
}

impl AppError {
    /// 服务端提供的错误信息（仅 `ServerError` 且响应体带 `error` 字段时存在）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::ServerError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// 便捷类型别名，统一项目内的 Result 签名
pub type AppResult<T> = Result<T, AppError>;

/// 将 AppError 转换为 String，供只接受字符串错误的前端边界使用
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_server_error() {
        let err = AppError::ServerError {
            status: 409,
            message: Some("Username already taken".to_string()),
        };
        assert_eq!(err.server_message(), Some("Username already taken"));

        let err = AppError::ServerError {
            status: 500,
            message: None,
        };
        assert_eq!(err.server_message(), None);

        let err = AppError::NetworkError("connection refused".to_string());
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_io_error_from_std() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "spms.json").into();
        assert!(matches!(err, AppError::IoError(_)));
        assert!(err.to_string().starts_with("IO 错误"));
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_into_string() {
        let msg: String = AppError::ServerError {
            status: 404,
            message: None,
        }
        .into();
        assert!(msg.contains("404"));
    }
}
