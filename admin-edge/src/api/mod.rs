//! API 路由模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 管理面板入口 (需登录) |
//! | /login | GET | 登录页 |
//! | /login | POST | 表单登录，写入 session 与 cookie |
//! | /logout | POST | 清除 session 与 cookie |
//! | /health | GET | 健康检查 |

pub mod health;
pub mod pages;
pub mod session;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::auth::route_guard;
use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}

/// Build the router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .route("/", get(pages::handler::home))
        .route(
            "/login",
            get(pages::handler::login_page).post(session::handler::login),
        )
        .route("/logout", post(session::handler::logout))
        .merge(health::router())
}

/// Request limit shared by every route; each `Router::layer` application
/// draws from the same semaphore
pub fn connection_limit(max_connections: usize) -> GlobalConcurrencyLimitLayer {
    GlobalConcurrencyLimitLayer::new(max_connections)
}

/// Build the fully configured application
///
/// Used by both the HTTP server and oneshot tests
pub fn build_app(state: ServerState) -> Router {
    let max_connections = state.config.max_connections;

    build_router()
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(connection_limit(max_connections))
                .layer(middleware::from_fn(log_request)),
        )
}
