use axum::{extract::State, response::Html};

use crate::core::ServerState;

const SECTIONS: [&str; 5] = ["Overview", "Categories", "Menu Items", "Ingredients", "Orders"];

/// `GET /` - dashboard landing, only reachable through the route guard
pub async fn home(State(state): State<ServerState>) -> Html<String> {
    let sections: String = SECTIONS
        .iter()
        .map(|title| format!("      <li>{}</li>\n", title))
        .collect();

    Html(format!(
        r#"<!doctype html>
<html>
  <head><title>Admin Dashboard</title></head>
  <body>
    <h1>Admin Dashboard</h1>
    <p>Backend: <code>{api}</code></p>
    <ul>
{sections}    </ul>
    <form method="post" action="/logout"><button type="submit">Logout</button></form>
  </body>
</html>
"#,
        api = escape(&state.config.client.api_base_url),
        sections = sections,
    ))
}

/// `GET /login`
pub async fn login_page() -> Html<String> {
    Html(login_html(None))
}

/// Login form, optionally with an error line
pub fn login_html(error: Option<&str>) -> String {
    let error = error
        .map(|msg| format!("    <p class=\"error\">{}</p>\n", escape(msg)))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html>
  <head><title>Admin Login</title></head>
  <body>
    <h1>Admin Login</h1>
{error}    <form method="post" action="/login">
      <input type="password" name="token" placeholder="Admin token" required>
      <button type="submit">Login</button>
    </form>
  </body>
</html>
"#
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
