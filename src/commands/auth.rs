// ============================================================================
// 认证处理器：登录、注册、退出
// 会话只保存在内存中，不做持久化
// ============================================================================

use std::cell::RefCell;

use crate::commands::{
    failure_message, MSG_ACCOUNT_CREATED, MSG_FILL_ALL_FIELDS, MSG_LOGIN_FAILED,
    MSG_PASSWORD_TOO_SHORT, MSG_REGISTRATION_FAILED, MSG_SERVER_UNREACHABLE,
};
use crate::config::ClientConfig;
use crate::models::dtos::{AuthView, UserBadge};
use crate::models::user::{is_password_too_short, Credentials, Registration, SessionUser};
use crate::services::auth_client::{AuthGateway, HttpAuthClient};
use crate::utils::controls::{Control, Controls};
use crate::utils::error::{AppError, AppResult};
use crate::utils::text::escape_html;

/// 认证请求失败时的提示：响应体无法解析与连接失败同样处理
fn auth_failure_message(err: &AppError, generic: &str) -> String {
    match err {
        AppError::DecodeError(_) => MSG_SERVER_UNREACHABLE.to_string(),
        _ => failure_message(err, generic),
    }
}

/// 登录/注册页面上显示的原始提示文本
#[derive(Debug, Default)]
struct AuthMessages {
    login_error: Option<String>,
    register_error: Option<String>,
    register_success: Option<String>,
}

pub struct AuthPanel<G: AuthGateway> {
    gateway: G,
    controls: Controls,
    session: RefCell<Option<SessionUser>>,
    messages: RefCell<AuthMessages>,
}

impl AuthPanel<HttpAuthClient> {
    pub fn from_config(config: ClientConfig) -> AppResult<Self> {
        Ok(Self::new(HttpAuthClient::new(config)?))
    }
}

impl<G: AuthGateway> AuthPanel<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            controls: Controls::new(),
            session: RefCell::new(None),
            messages: RefCell::new(AuthMessages::default()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// 登录；成功后保存会话
    pub async fn login(&self, username: &str, password: &str) -> AppResult<SessionUser> {
        self.messages.borrow_mut().login_error = None;

        let credentials = match Credentials::validated(username, password) {
            Ok(credentials) => credentials,
            Err(err) => {
                self.messages.borrow_mut().login_error = Some(MSG_FILL_ALL_FIELDS.to_string());
                return Err(err);
            }
        };

        let _submit = self.controls.acquire(Control::LoginSubmit)?;

        match self.gateway.login(&credentials).await {
            Ok(user) => {
                log::info!("用户已登录：{}", user.username);
                *self.session.borrow_mut() = Some(user.clone());
                Ok(user)
            }
            Err(err) => {
                log::warn!("登录失败（{}）：{}", credentials.username, err);
                self.messages.borrow_mut().login_error =
                    Some(auth_failure_message(&err, MSG_LOGIN_FAILED));
                Err(err)
            }
        }
    }

    /// 注册；成功后不会自动登录，界面应跳转回登录页
    pub async fn register(
        &self,
        full_name: &str,
        username: &str,
        password: &str,
    ) -> AppResult<SessionUser> {
        {
            let mut messages = self.messages.borrow_mut();
            messages.register_error = None;
            messages.register_success = None;
        }

        let registration = match Registration::validated(full_name, username, password) {
            Ok(registration) => registration,
            Err(err) => {
                let all_present = !full_name.trim().is_empty()
                    && !username.trim().is_empty()
                    && !password.is_empty();
                let message = if all_present && is_password_too_short(password) {
                    MSG_PASSWORD_TOO_SHORT
                } else {
                    MSG_FILL_ALL_FIELDS
                };
                self.messages.borrow_mut().register_error = Some(message.to_string());
                return Err(err);
            }
        };

        let _submit = self.controls.acquire(Control::RegisterSubmit)?;

        match self.gateway.register(&registration).await {
            Ok(user) => {
                log::info!("新用户已注册：{}", user.username);
                self.messages.borrow_mut().register_success = Some(MSG_ACCOUNT_CREATED.to_string());
                Ok(user)
            }
            Err(err) => {
                log::warn!("注册失败（{}）：{}", registration.username, err);
                self.messages.borrow_mut().register_error =
                    Some(auth_failure_message(&err, MSG_REGISTRATION_FAILED));
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        if let Some(user) = self.session.borrow_mut().take() {
            log::info!("用户已退出：{}", user.username);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn session(&self) -> Option<SessionUser> {
        self.session.borrow().clone()
    }

    /// 切换登录/注册卡片时清空提示
    pub fn clear_messages(&self) {
        *self.messages.borrow_mut() = AuthMessages::default();
    }

    pub fn view(&self) -> AuthView {
        let messages = self.messages.borrow();
        let escape = |s: &Option<String>| s.as_deref().map(escape_html);
        AuthView {
            user: self.session.borrow().as_ref().map(|user| UserBadge {
                initials: escape_html(&user.initials()),
                full_name: escape_html(&user.full_name),
            }),
            login_error: escape(&messages.login_error),
            register_error: escape(&messages.register_error),
            register_success: escape(&messages.register_success),
            login_disabled: self.controls.is_disabled(Control::LoginSubmit),
            register_disabled: self.controls.is_disabled(Control::RegisterSubmit),
        }
    }
}
