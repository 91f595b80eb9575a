// ============================================================================
// 仪表盘处理器：项目缓存、筛选、搜索、新增/删除协调
//
// 单线程协作式模型：状态使用 Cell/RefCell 保存，多个处理器 future
// 可以在同一线程上交错执行；任何借用都不会跨越 await。
// 缓存只会被 refresh 整体替换。刷新结果按完成顺序生效（后完成者覆盖），
// 不做请求序号校验。
// ============================================================================

use std::cell::{Cell, RefCell};

use crate::commands::{
    failure_message, MSG_ADD_FAILED, MSG_DELETE_FAILED, MSG_FETCH_FAILED, MSG_FILL_ALL_FIELDS,
    MSG_PROJECT_ADDED, MSG_PROJECT_DELETED,
};
use crate::config::ClientConfig;
use crate::models::dtos::{Ack, DashboardView, DeletePrompt, Notification, Stats};
use crate::models::project::{NewProject, Project, ProjectStatus};
use crate::services::cache::{self, ProjectCache};
use crate::services::filter::{self, FilterState};
use crate::services::remote_store::{HttpProjectStore, ProjectStore};
use crate::services::{render, stats};
use crate::utils::controls::{Control, Controls};
use crate::utils::error::{AppError, AppResult};

/// 等待确认的删除请求
#[derive(Debug, Clone)]
struct PendingDelete {
    id: i64,
    title: String,
}

/// 仪表盘状态持有者
pub struct Dashboard<S: ProjectStore> {
    store: S,
    cache: RefCell<ProjectCache>,
    filter: Cell<FilterState>,
    search: RefCell<String>,
    controls: Controls,
    /// 进行中的刷新数量，大于 0 时显示加载状态
    pending_refreshes: Cell<usize>,
    add_form_open: Cell<bool>,
    pending_delete: RefCell<Option<PendingDelete>>,
    notifications: RefCell<Vec<Notification>>,
}

impl Dashboard<HttpProjectStore> {
    /// 使用 HTTP 后端创建仪表盘
    pub fn from_config(config: ClientConfig) -> AppResult<Self> {
        Ok(Self::new(HttpProjectStore::new(config)?))
    }
}

impl<S: ProjectStore> Dashboard<S> {
    /// 创建空缓存的仪表盘，调用方随后应执行一次 `refresh`
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: RefCell::new(ProjectCache::new()),
            filter: Cell::new(FilterState::new()),
            search: RefCell::new(String::new()),
            controls: Controls::new(),
            pending_refreshes: Cell::new(0),
            add_form_open: Cell::new(false),
            pending_delete: RefCell::new(None),
            notifications: RefCell::new(Vec::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================================================
    // 缓存刷新
    // ========================================================================

    /// 重新拉取完整列表并整体替换缓存
    ///
    /// # 返回
    /// - `Ok(Vec<Project>)`: 新的完整列表
    /// - `Err(AppError)`: 拉取失败，缓存保持不变，并已产生错误通知
    pub async fn refresh(&self) -> AppResult<Vec<Project>> {
        self.pending_refreshes.set(self.pending_refreshes.get() + 1);
        let _loading = scopeguard::guard((), |_| {
            self.pending_refreshes.set(self.pending_refreshes.get() - 1);
        });

        match cache::fetch_snapshot(&self.store).await {
            Ok(snapshot) => {
                let mut cache = self.cache.borrow_mut();
                let projects = cache.replace(snapshot).to_vec();
                log::info!("项目列表已刷新，共 {} 条", projects.len());
                Ok(projects)
            }
            Err(err) => {
                log::warn!("拉取项目列表失败：{}", err);
                self.notify(Notification::error(MSG_FETCH_FAILED));
                Err(err)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_refreshes.get() > 0
    }

    // ========================================================================
    // 新增项目
    // ========================================================================

    pub fn open_add_form(&self) {
        self.add_form_open.set(true);
    }

    pub fn close_add_form(&self) {
        self.add_form_open.set(false);
    }

    /// 提交新增项目表单
    ///
    /// 本地校验失败时不发起请求；提交期间提交按钮被禁用，重复提交返回 `Busy`。
    /// 成功后刷新缓存，不做乐观插入。
    pub async fn submit_project(
        &self,
        student_name: &str,
        project_title: &str,
        status: &str,
    ) -> AppResult<Ack> {
        let new_project = match NewProject::validated(student_name, project_title, status) {
            Ok(project) => project,
            Err(err) => {
                log::warn!("新增项目校验失败：{}", err);
                self.notify(Notification::error(MSG_FILL_ALL_FIELDS));
                return Err(err);
            }
        };

        let _submit = self.controls.acquire(Control::AddProjectSubmit).inspect_err(|_| {
            log::debug!("新增项目请求进行中，忽略重复提交");
        })?;
        self.add_form_open.set(false);

        match self.store.create_project(&new_project).await {
            Ok(ack) => {
                log::info!(
                    "项目已新增：{} / {}",
                    new_project.student_name,
                    new_project.project_title
                );
                self.notify(Notification::success(MSG_PROJECT_ADDED));
                // 刷新失败会单独产生通知，不影响新增结果
                let _ = self.refresh().await;
                Ok(ack)
            }
            Err(err) => {
                log::warn!("新增项目失败：{}", err);
                self.notify(Notification::error(failure_message(&err, MSG_ADD_FAILED)));
                Err(err)
            }
        }
    }

    // ========================================================================
    // 删除项目（两阶段：请求确认 → 执行）
    // ========================================================================

    /// 第一阶段：记录待删除的项目并返回确认提示
    pub fn request_delete(&self, id: i64, title: &str) -> DeletePrompt {
        *self.pending_delete.borrow_mut() = Some(PendingDelete {
            id,
            title: title.to_string(),
        });
        render::delete_prompt(id, title)
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.borrow_mut().take();
    }

    /// 第二阶段：执行已确认的删除
    ///
    /// 没有待确认的删除时返回 `NotConfirmed`，不会访问远程存储。
    pub async fn confirm_delete(&self) -> AppResult<Ack> {
        let _confirm = self.controls.acquire(Control::DeleteConfirm)?;

        let Some(pending) = self.pending_delete.borrow_mut().take() else {
            log::warn!("没有待确认的删除请求");
            return Err(AppError::NotConfirmed);
        };

        match self.store.delete_project(pending.id).await {
            Ok(ack) => {
                log::info!("项目已删除：#{} {}", pending.id, pending.title);
                self.notify(Notification::success(MSG_PROJECT_DELETED));
                let _ = self.refresh().await;
                Ok(ack)
            }
            Err(err) => {
                log::warn!("删除项目 #{} 失败：{}", pending.id, err);
                self.notify(Notification::error(failure_message(&err, MSG_DELETE_FAILED)));
                Err(err)
            }
        }
    }

    // ========================================================================
    // 筛选与搜索
    // ========================================================================

    /// 点击状态卡片：再次点击当前状态会清除筛选
    pub fn select_filter(&self, status: ProjectStatus) -> Option<ProjectStatus> {
        let mut state = self.filter.get();
        let active = state.select(status);
        self.filter.set(state);
        active
    }

    /// 点击总数卡片
    pub fn clear_filter(&self) {
        let mut state = self.filter.get();
        state.clear();
        self.filter.set(state);
    }

    pub fn active_filter(&self) -> Option<ProjectStatus> {
        self.filter.get().active()
    }

    pub fn set_search(&self, query: &str) {
        *self.search.borrow_mut() = query.to_string();
    }

    // ========================================================================
    // 派生数据
    // ========================================================================

    /// 缓存中的完整列表
    pub fn projects(&self) -> Vec<Project> {
        self.cache.borrow().projects().to_vec()
    }

    /// 当前筛选和搜索条件下可见的记录
    pub fn visible_projects(&self) -> Vec<Project> {
        let cache = self.cache.borrow();
        let filtered = filter::apply_filter(cache.projects(), self.active_filter());
        filter::apply_search(filtered, &self.search.borrow())
            .into_iter()
            .cloned()
            .collect()
    }

    /// 统计数据，始终基于完整缓存
    pub fn stats(&self) -> Stats {
        stats::compute_stats(self.cache.borrow().projects())
    }

    /// 生成完整视图快照
    pub fn view(&self) -> DashboardView {
        let cache = self.cache.borrow();
        let active = self.active_filter();
        let filtered = filter::apply_filter(cache.projects(), active);
        let visible = filter::apply_search(filtered.clone(), &self.search.borrow());

        DashboardView {
            table: render::render_table(&filtered, &visible, active),
            stats: stats::compute_stats(cache.projects()),
            active_filter: active,
            active_card: render::active_card(active),
            loading: self.is_loading(),
            add_form_open: self.add_form_open.get(),
            submit_disabled: self.controls.is_disabled(Control::AddProjectSubmit),
            delete_disabled: self.controls.is_disabled(Control::DeleteConfirm),
            pending_delete: self
                .pending_delete
                .borrow()
                .as_ref()
                .map(|p| render::delete_prompt(p.id, &p.title)),
        }
    }

    // ========================================================================
    // 通知
    // ========================================================================

    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }

    /// 取出所有待显示的通知
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.borrow_mut())
    }
}

// ============================================================================
// 单元测试
// ============================================================================
