//! Admin Edge - 管理面板的请求级路由守卫
//!
//! 在 HTTP 层执行与 CLI 相同的守卫规则，并与 CLI 共享同一个 token 存储。
//!
//! ```text
//! admin-edge/src/
//! ├── core/    # 配置、状态、错误、服务器
//! ├── auth/    # adminToken cookie 与路由守卫中间件
//! ├── api/     # 页面、登录登出、健康检查
//! └── utils/   # 日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod utils;

pub use api::build_app;
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::logger::init_logger_with_file;

/// 加载 `.env` 并初始化日志
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}
