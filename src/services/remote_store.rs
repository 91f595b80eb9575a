// ============================================================================
// 远程项目存储：与后端 REST 接口通信
// ✅ 只能做：HTTP 请求、JSON 解析
// ⛔ 禁止：修改缓存、产生通知（由 commands 层负责）
// ============================================================================

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::models::dtos::Ack;
use crate::models::project::{NewProject, Project};
use crate::services::http;
use crate::utils::error::AppResult;

/// 项目存储接口
///
/// 列表按 `id` 降序返回；任何非 2xx 响应都视为失败。
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// `GET /projects`
    async fn list_projects(&self) -> AppResult<Vec<Project>>;

    /// `POST /add-project`
    async fn create_project(&self, project: &NewProject) -> AppResult<Ack>;

    /// `DELETE /delete-project/:id`
    async fn delete_project(&self, id: i64) -> AppResult<Ack>;
}

/// 基于 reqwest 的 HTTP 实现
pub struct HttpProjectStore {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpProjectStore {
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// 使用外部构建的客户端（如需自定义代理、TLS）
    pub fn with_client(config: ClientConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl ProjectStore for HttpProjectStore {
    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        let url = self.config.endpoint("/projects");
        let resp = http::send(self.client.get(&url)).await?;
        let resp = http::ensure_success(resp).await?;
        http::decode_json(resp).await
    }

    async fn create_project(&self, project: &NewProject) -> AppResult<Ack> {
        let url = self.config.endpoint("/add-project");
        let resp = http::send(self.client.post(&url).json(project)).await?;
        let resp = http::ensure_success(resp).await?;
        // 成功响应体只用于展示，解析失败不影响结果
        Ok(http::decode_json(resp).await.unwrap_or_default())
    }

    async fn delete_project(&self, id: i64) -> AppResult<Ack> {
        let url = self.config.endpoint(&format!("/delete-project/{}", id));
        let resp = http::send(self.client.delete(&url)).await?;
        let resp = http::ensure_success(resp).await?;
        Ok(http::decode_json(resp).await.unwrap_or_default())
    }
}

// ============================================================================
// 内存 Mock（仅测试）
// ============================================================================

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use time::OffsetDateTime;

    use super::ProjectStore;
    use crate::models::dtos::Ack;
    use crate::models::project::{NewProject, Project};
    use crate::utils::error::{AppError, AppResult};

    /// 可注入的失败类型
    #[derive(Clone, Debug)]
    pub enum MockFailure {
        Network,
        Server {
            status: u16,
            message: Option<&'static str>,
        },
    }

    impl MockFailure {
        fn to_error(&self) -> AppError {
            match self {
                MockFailure::Network => AppError::NetworkError("connection refused".to_string()),
                MockFailure::Server { status, message } => AppError::ServerError {
                    status: *status,
                    message: message.map(str::to_string),
                },
            }
        }
    }

    /// 记录到的调用
    #[derive(Clone, Debug, PartialEq)]
    pub enum MockCall {
        List,
        Create(NewProject),
        Delete(i64),
    }

    #[derive(Default)]
    struct MockState {
        projects: Vec<Project>,
        next_id: i64,
        calls: Vec<MockCall>,
        list_delays: VecDeque<Duration>,
        fail_list: Option<MockFailure>,
        fail_create: Option<MockFailure>,
        fail_delete: Option<MockFailure>,
    }

    /// 行为确定的内存后端：新增分配递增 id，列表按 id 降序返回
    #[derive(Default)]
    pub struct MockProjectStore {
        state: Mutex<MockState>,
    }

    impl MockProjectStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// 以给定记录初始化（id 由调用方指定）
        pub fn with_projects(projects: Vec<Project>) -> Self {
            let next_id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            Self {
                state: Mutex::new(MockState {
                    projects,
                    next_id,
                    ..MockState::default()
                }),
            }
        }

        pub fn insert(&self, student_name: &str, project_title: &str, status: &str) -> i64 {
            let mut state = self.state.lock().unwrap();
            insert_locked(&mut state, student_name, project_title, status)
        }

        pub fn calls(&self) -> Vec<MockCall> {
            self.state.lock().unwrap().calls.clone()
        }

        pub fn count_calls(&self, pred: impl Fn(&MockCall) -> bool) -> usize {
            self.state.lock().unwrap().calls.iter().filter(|c| pred(*c)).count()
        }

        /// 为后续的列表请求依次设置延迟（快照在调用时获取，延迟后返回）
        pub fn push_list_delay(&self, delay: Duration) {
            self.state.lock().unwrap().list_delays.push_back(delay);
        }

        pub fn fail_list(&self, failure: Option<MockFailure>) {
            self.state.lock().unwrap().fail_list = failure;
        }

        pub fn fail_create(&self, failure: Option<MockFailure>) {
            self.state.lock().unwrap().fail_create = failure;
        }

        pub fn fail_delete(&self, failure: Option<MockFailure>) {
            self.state.lock().unwrap().fail_delete = failure;
        }
    }

    fn insert_locked(state: &mut MockState, student_name: &str, project_title: &str, status: &str) -> i64 {
        if state.next_id == 0 {
            state.next_id = 1;
        }
        let id = state.next_id;
        state.next_id += 1;
        state.projects.push(Project {
            id,
            student_name: student_name.to_string(),
            project_title: project_title.to_string(),
            status: status.to_string(),
            created_at: Some(OffsetDateTime::now_utc()),
        });
        id
    }

    #[async_trait]
    impl ProjectStore for MockProjectStore {
        async fn list_projects(&self) -> AppResult<Vec<Project>> {
            let (snapshot, delay) = {
                let mut state = self.state.lock().unwrap();
                state.calls.push(MockCall::List);
                if let Some(failure) = &state.fail_list {
                    return Err(failure.to_error());
                }
                let mut snapshot = state.projects.clone();
                snapshot.sort_by(|a, b| b.id.cmp(&a.id));
                (snapshot, state.list_delays.pop_front())
            };
            match delay {
                Some(delay) => tokio::time::sleep(delay).await,
                None => tokio::task::yield_now().await,
            }
            Ok(snapshot)
        }

        async fn create_project(&self, project: &NewProject) -> AppResult<Ack> {
            // 模拟网络往返：先让出执行权
            tokio::task::yield_now().await;
            let mut state = self.state.lock().unwrap();
            state.calls.push(MockCall::Create(project.clone()));
            if let Some(failure) = &state.fail_create {
                return Err(failure.to_error());
            }
            insert_locked(
                &mut state,
                &project.student_name,
                &project.project_title,
                &project.status,
            );
            Ok(Ack {
                message: Some("Project added successfully".to_string()),
            })
        }

        async fn delete_project(&self, id: i64) -> AppResult<Ack> {
            tokio::task::yield_now().await;
            let mut state = self.state.lock().unwrap();
            state.calls.push(MockCall::Delete(id));
            if let Some(failure) = &state.fail_delete {
                return Err(failure.to_error());
            }
            state.projects.retain(|p| p.id != id);
            Ok(Ack {
                message: Some("Project deleted successfully".to_string()),
            })
        }
    }
}
