// ============================================================================
// 客户端配置
// 默认值 → JSON 配置文件 / 环境变量覆盖；读取失败时回退默认值并记录日志
// ============================================================================

use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// 后端地址环境变量
pub const ENV_API_BASE: &str = "SPMS_API_BASE";
/// 请求超时（秒）环境变量
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "SPMS_REQUEST_TIMEOUT_SECS";
/// 通知显示时长（毫秒）环境变量
pub const ENV_TOAST_DURATION_MS: &str = "SPMS_TOAST_DURATION_MS";

const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// 后端基础地址，如 http://localhost:3000
    pub api_base: String,
    pub request_timeout_secs: u64,
    pub toast_duration_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl ClientConfig {
    /// 从环境变量读取配置，缺失或非法的值回退为默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: try_load(ENV_API_BASE, defaults.api_base),
            request_timeout_secs: try_load(ENV_REQUEST_TIMEOUT_SECS, defaults.request_timeout_secs),
            toast_duration_ms: try_load(ENV_TOAST_DURATION_MS, defaults.toast_duration_ms),
        }
    }

    /// 从 JSON 文件读取配置，文件中缺失的字段使用默认值
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).inspect_err(|e| {
            log::warn!("无法读取配置文件 {}: {}", path.display(), e);
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::ValidationError(format!("配置文件格式错误 {}: {}", path.display(), e))
        })
    }

    /// 拼接接口地址，兼容 api_base 末尾有无斜杠
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: std::fmt::Display,
{
    let raw = match env::var(key) {
        Ok(raw) => raw,
        Err(_) => {
            log::info!("{key} 未设置，使用默认值：{default:?}");
            return default;
        }
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{key} 的值无效（{e}），使用默认值：{default:?}");
            default
        }
    }
}
