// ============================================================================
// [总线] 学生项目监控系统客户端的组装车间
// ✅ 只能做：pub mod 暴露子模块、重新导出常用类型
// ⛔ 禁止：直接实现业务逻辑
//
// 分层：commands（界面状态与事件）→ services（纯逻辑与远程访问）
//       → models（数据结构）→ utils（错误、文本、控件守卫）
// ============================================================================

pub mod commands;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use commands::auth::AuthPanel;
pub use commands::dashboard::Dashboard;
pub use config::ClientConfig;
pub use models::project::{NewProject, Project, ProjectStatus};
pub use services::auth_client::{AuthGateway, HttpAuthClient};
pub use services::remote_store::{HttpProjectStore, ProjectStore};
pub use utils::error::{AppError, AppResult};
