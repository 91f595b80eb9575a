// ============================================================================
// 用户与认证请求模型
// 对应 POST /login、POST /register 的请求体与响应中的 user 对象
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// 密码最小长度（客户端与服务端一致）
pub const MIN_PASSWORD_LEN: usize = 4;

/// 登录后保存在会话中的用户信息，仅用于显示和路由守卫
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl SessionUser {
    /// 侧边栏头像缩写：取首尾两个单词的首字母，只有一个单词时取一个字母
    pub fn initials(&self) -> String {
        let parts: Vec<&str> = self.full_name.split_whitespace().collect();
        let letters: String = match parts.as_slice() {
            [] => String::new(),
            [only] => only.chars().take(1).collect(),
            [first, .., last] => first
                .chars()
                .take(1)
                .chain(last.chars().take(1))
                .collect(),
        };
        letters.to_uppercase()
    }
}

/// 登录请求体
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// 用户名去除首尾空白，密码保持原样；两者都不能为空
    pub fn validated(username: &str, password: &str) -> AppResult<Self> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError("用户名和密码不能为空".to_string()));
        }
        Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// 注册请求体
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Registration {
    pub full_name: String,
    pub username: String,
    pub password: String,
}

impl Registration {
    pub fn validated(full_name: &str, username: &str, password: &str) -> AppResult<Self> {
        let full_name = full_name.trim();
        let username = username.trim();
        if full_name.is_empty() || username.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError("所有字段均为必填".to_string()));
        }
        if is_password_too_short(password) {
            return Err(AppError::ValidationError(format!(
                "密码长度至少为 {} 个字符",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(Registration {
            full_name: full_name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// 按字符数判断密码是否短于 MIN_PASSWORD_LEN
pub fn is_password_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: &str) -> SessionUser {
        SessionUser {
            id: 1,
            full_name: full_name.to_string(),
            username: "msantos".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_initials_first_and_last_word() {
        assert_eq!(user("maria clara santos").initials(), "MS");
        assert_eq!(user("  Juan   Dela Cruz ").initials(), "JC");
    }

    #[test]
    fn test_initials_single_word_and_empty() {
        assert_eq!(user("maria").initials(), "M");
        assert_eq!(user("   ").initials(), "");
    }

    #[test]
    fn test_session_user_role_defaults() {
        let json = r#"{"id":3,"full_name":"Ana Reyes","username":"ana"}"#;
        let parsed: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.role, "user");
    }

    #[test]
    fn test_credentials_validation() {
        let creds = Credentials::validated("  ana ", "pw").unwrap();
        assert_eq!(creds.username, "ana");
        assert!(Credentials::validated("   ", "secret").is_err());
        assert!(Credentials::validated("ana", "").is_err());
    }

    #[test]
    fn test_registration_password_min_length() {
        assert!(Registration::validated("Ana Reyes", "ana", "abc").is_err());
        let reg = Registration::validated(" Ana Reyes ", "ana", "abcd").unwrap();
        assert_eq!(reg.full_name, "Ana Reyes");
    }

    #[test]
    fn test_registration_requires_all_fields() {
        let err = Registration::validated("", "ana", "abcd").unwrap_err();
        assert!(err.to_string().contains("必填"));
    }
}
