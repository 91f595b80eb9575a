// ============================================================================
// 业务层：纯 Rust 核心逻辑
// ✅ 特点：派生函数保持纯净，网络访问收敛在 store/client 中，方便写 #[test]
// ⛔ 禁止：产生界面通知、持有界面状态
// ============================================================================

pub mod auth_client;
pub mod cache;
pub mod filter;
pub mod http;
pub mod markup;
pub mod remote_store;
pub mod render;
pub mod stats;
