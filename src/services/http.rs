// ============================================================================
// HTTP 公共辅助：客户端构建、响应分类
// ✅ 只能做：HTTP 请求、JSON 解析
// ⛔ 禁止：修改缓存、产生通知
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::utils::error::{AppError, AppResult};

/// 失败响应体 `{ "error": "..." }`
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// 按配置构建 reqwest 客户端（统一超时）
pub fn build_client(config: &ClientConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| AppError::NetworkError(format!("无法创建 HTTP 客户端：{}", e)))
}

/// 从失败响应体中提取服务端错误信息
///
/// 只识别字符串类型的 `error` 字段；空字符串、非 JSON、其他结构均返回 None。
pub fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

/// 发送请求，把发送失败转换为 NetworkError
pub async fn send(req: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
    req.send()
        .await
        .map_err(|e| AppError::NetworkError(format!("请求失败：{}", e)))
}

/// 非 2xx 响应转换为 ServerError，2xx 原样返回
pub async fn ensure_success(resp: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(AppError::ServerError {
        status: status.as_u16(),
        message: server_error_message(&body),
    })
}

/// 读取 2xx 响应体并解析为指定类型
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> AppResult<T> {
    let body = resp
        .text()
        .await
        .map_err(|e| AppError::NetworkError(format!("读取响应失败：{}", e)))?;
    serde_json::from_str(&body).map_err(|e| AppError::DecodeError(e.to_string()))
}
