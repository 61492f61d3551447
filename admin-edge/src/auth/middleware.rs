//! 路由守卫中间件
//!
//! 与 CLI 的 `ClientGuard` 使用同一条规则 (`shared::route::decide`)。
//! 请求已认证当且仅当 `adminToken` cookie 与 session 中的 token 一致。
//!
//! | 路径 | 已认证 | 未认证 |
//! |------|--------|--------|
//! | `/` | 放行 | 重定向 `/login` |
//! | `/login` | 重定向 `/` | 放行 |
//! | 其他 | 放行 | 放行 |

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shared::route::{self, GuardDecision};

use crate::auth::read_token_cookie;
use crate::core::ServerState;

pub async fn route_guard(State(state): State<ServerState>, req: Request, next: Next) -> Response {
    let cookie = read_token_cookie(req.headers());
    let authenticated = state.session.authorizes(cookie.as_deref());

    match route::decide(req.uri().path(), authenticated) {
        GuardDecision::Pass => next.run(req).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(
                from = req.uri().path(),
                to = target.path(),
                "Edge route guard redirect"
            );
            Redirect::to(target.path()).into_response()
        }
    }
}
