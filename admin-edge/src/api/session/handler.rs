use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use shared::Route;

use crate::api::pages::handler::login_html;
use crate::auth::{clear_token_cookie, is_cookie_safe, read_token_cookie, token_cookie};
use crate::core::{Result, ServerError, ServerState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub token: String,
}

fn login_error(status: StatusCode, message: &str) -> Response {
    (status, Html(login_html(Some(message)))).into_response()
}

/// `POST /login`
///
/// Only an empty session can be claimed. Replacing an active token requires
/// logging out with its cookie first.
pub async fn login(
    State(state): State<ServerState>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let token = form.token.trim();
    if !is_cookie_safe(token) {
        tracing::warn!("Rejected login with malformed token");
        return Ok(login_error(StatusCode::BAD_REQUEST, "Enter a valid admin token"));
    }

    if state.session.is_authenticated() {
        tracing::warn!("Rejected login while another admin session is active");
        return Ok(login_error(
            StatusCode::CONFLICT,
            "An admin session is already active",
        ));
    }

    state.session.login(token)?;
    if !state.session.is_authenticated() {
        return Err(ServerError::SessionUnavailable);
    }

    Ok((
        [(SET_COOKIE, token_cookie(token))],
        Redirect::to(Route::Home.path()),
    )
        .into_response())
}

/// `POST /logout`, only for the holder of the session cookie
pub async fn logout(State(state): State<ServerState>, headers: HeaderMap) -> Result<Response> {
    let cookie = read_token_cookie(&headers);
    if !state.session.authorizes(cookie.as_deref()) {
        tracing::warn!("Rejected logout without the session cookie");
        return Err(ServerError::Unauthorized);
    }

    state.session.logout()?;

    Ok((
        [(SET_COOKIE, clear_token_cookie())],
        Redirect::to(Route::Login.path()),
    )
        .into_response())
}
