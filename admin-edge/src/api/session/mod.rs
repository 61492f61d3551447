//! 登录 / 登出
//!
//! 登录同时写入 session 与 `adminToken` cookie，登出同时清除两者，
//! 因此 edge 守卫与 CLI 守卫看到的认证状态始终一致。

pub mod handler;
