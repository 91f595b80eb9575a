// ============================================================================
// 控件占用状态
// 请求进行期间禁用触发它的控件，防止同一控件重复提交；
// 使用 scopeguard 确保在任何退出路径上都会恢复控件
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;

use scopeguard::ScopeGuard;
use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// 会触发网络请求的界面控件
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// 新增项目表单的提交按钮
    AddProjectSubmit,
    /// 删除确认弹窗的确认按钮
    DeleteConfirm,
    /// 登录按钮
    LoginSubmit,
    /// 注册按钮
    RegisterSubmit,
}

/// 当前被禁用的控件集合（单线程，内部可变）
#[derive(Debug, Default)]
pub struct Controls {
    disabled: RefCell<HashSet<Control>>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self, control: Control) -> bool {
        self.disabled.borrow().contains(&control)
    }

    /// 占用控件：控件已被占用时返回 `AppError::Busy`
    ///
    /// 返回的 guard 被 drop 时（无论成功、出错还是提前返回）控件恢复可用。
    pub fn acquire(&self, control: Control) -> AppResult<ScopeGuard<(), impl FnOnce(()) + '_>> {
        if !self.disabled.borrow_mut().insert(control) {
            return Err(AppError::Busy);
        }
        Ok(scopeguard::guard((), move |_| {
            self.disabled.borrow_mut().remove(&control);
        }))
    }
}
