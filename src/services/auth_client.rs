// ============================================================================
// 认证客户端：POST /login、POST /register
// ✅ 只能做：HTTP 请求、JSON 解析
// ⛔ 禁止：保存会话、产生界面提示（由 commands 层负责）
// ============================================================================

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::models::user::{Credentials, Registration, SessionUser};
use crate::services::http;
use crate::utils::error::AppResult;

/// 认证接口
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> AppResult<SessionUser>;

    async fn register(&self, registration: &Registration) -> AppResult<SessionUser>;
}

/// 登录/注册成功的响应体 `{ message, user }`
#[derive(Deserialize)]
struct AuthResponse {
    user: SessionUser,
}

pub struct HttpAuthClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpAuthClient {
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn with_client(config: ClientConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    async fn post_for_user<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<SessionUser> {
        let url = self.config.endpoint(path);
        let resp = http::send(self.client.post(&url).json(body)).await?;
        let resp = http::ensure_success(resp).await?;
        let body: AuthResponse = http::decode_json(resp).await?;
        Ok(body.user)
    }
}

#[async_trait]
impl AuthGateway for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> AppResult<SessionUser> {
        self.post_for_user("/login", credentials).await
    }

    async fn register(&self, registration: &Registration) -> AppResult<SessionUser> {
        self.post_for_user("/register", registration).await
    }
}

// ============================================================================
// 内存 Mock（仅测试）
// ============================================================================
