//! 认证模块 - 基于 `adminToken` cookie 的路由守卫

pub mod cookie;
pub mod middleware;

pub use cookie::{
    ADMIN_TOKEN_COOKIE, clear_token_cookie, is_cookie_safe, read_token_cookie, token_cookie,
};
pub use middleware::route_guard;
