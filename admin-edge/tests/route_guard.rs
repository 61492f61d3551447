// admin-edge/tests/route_guard.rs
// Edge route guard, login and logout through the full middleware stack

use admin_client::{ClientConfig, ClientGuard, GuardDecision, Route, Session};
use admin_edge::{Config, ServerState, build_app};
use axum::body::{Body, to_bytes};
use http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

fn state(session: Session) -> ServerState {
    ServerState::new(Config::with_overrides(0, ClientConfig::default()), session)
}

async fn send(session: &Session, request: Request<Body>) -> Response<Body> {
    build_app(state(session.clone()))
        .oneshot(request)
        .await
        .unwrap()
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_home_redirects_to_login_without_cookie() {
    let session = Session::in_memory();

    let response = send(&session, get("/", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));

    let response = send(&session, get("/login", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Admin Login"));
}

#[tokio::test]
async fn test_matching_cookie_passes_home_and_bounces_login() {
    let session = Session::in_memory();
    session.login("t1").unwrap();

    let response = send(&session, get("/", Some("adminToken=t1"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Admin Dashboard"));

    let response = send(&session, get("/login", Some("adminToken=t1"))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
}

#[tokio::test]
async fn test_cookie_must_match_the_session() {
    let session = Session::in_memory();
    session.login("current").unwrap();

    let response = send(&session, get("/", Some("adminToken=stale"))).await;
    assert_eq!(location(&response), Some("/login"));

    // Cookie left behind after the session was cleared elsewhere
    session.logout().unwrap();
    let response = send(&session, get("/", Some("adminToken=current"))).await;
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_unguarded_paths_pass() {
    let session = Session::in_memory();

    let response = send(&session, get("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["authenticated"], false);

    let response = send(&session, get("/nowhere", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_sets_session_and_cookie() {
    let session = Session::in_memory();

    let response = send(&session, post_form("/login", "token=abc.def")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
    assert!(set_cookie(&response).starts_with("adminToken=abc.def;"));
    assert_eq!(session.token().as_deref(), Some("abc.def"));

    // The console guard sees the same session
    let guard = ClientGuard::new(session.clone());
    assert_eq!(guard.navigate(Route::Home), GuardDecision::Pass);
    assert_eq!(
        guard.navigate(Route::Login),
        GuardDecision::Redirect(Route::Home)
    );
}

#[tokio::test]
async fn test_login_rejects_blank_token() {
    let session = Session::in_memory();

    let response = send(&session, post_form("/login", "token=")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookie(&response).is_empty());
    assert!(!session.is_authenticated());
    assert!(body_text(response).await.contains("Enter a valid admin token"));
}

#[tokio::test]
async fn test_login_without_storage_fails() {
    let session = Session::detached();

    let response = send(&session, post_form("/login", "token=abc")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(set_cookie(&response).is_empty());
}

#[tokio::test]
async fn test_logout_clears_session_and_cookie() {
    let session = Session::in_memory();
    session.login("t1").unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .header(header::COOKIE, "adminToken=t1")
        .body(Body::empty())
        .unwrap();
    let response = send(&session, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
    assert!(set_cookie(&response).contains("Max-Age=0"));
    assert!(!session.is_authenticated());

    let response = send(&session, get("/", Some("adminToken=t1"))).await;
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_anonymous_login_cannot_replace_an_active_token() {
    let session = Session::in_memory();
    session.login("real-admin-token").unwrap();

    let response = send(&session, post_form("/login", "token=intruder")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(set_cookie(&response).is_empty());
    assert_eq!(session.token().as_deref(), Some("real-admin-token"));
    assert!(body_text(response).await.contains("already active"));
}

#[tokio::test]
async fn test_logout_requires_the_session_cookie() {
    let session = Session::in_memory();
    session.login("real-admin-token").unwrap();

    let anonymous = Request::builder()
        .method("POST")
        .uri("/logout")
        .body(Body::empty())
        .unwrap();
    let response = send(&session, anonymous).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session.is_authenticated());

    let stale = Request::builder()
        .method("POST")
        .uri("/logout")
        .header(header::COOKIE, "adminToken=old")
        .body(Body::empty())
        .unwrap();
    let response = send(&session, stale).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(session.token().as_deref(), Some("real-admin-token"));
}
