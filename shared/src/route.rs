//! Guarded routes and the redirect rule
//!
//! The same rule runs at the edge (per request) and in the console (before
//! the dashboard mounts). Only `/` and `/login` are guarded.

use serde::{Deserialize, Serialize};

/// Guarded page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Dashboard, `/`
    Home,
    /// `/login`
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
        }
    }

    /// Matches a request path against the guarded routes
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            _ => None,
        }
    }
}

/// Outcome of the guard for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Pass,
    Redirect(Route),
}

/// Logged in users are sent away from the login page, anonymous users away
/// from the dashboard. Everything else passes.
pub fn decide(path: &str, authenticated: bool) -> GuardDecision {
    match (Route::from_path(path), authenticated) {
        (Some(Route::Login), true) => GuardDecision::Redirect(Route::Home),
        (Some(Route::Home), false) => GuardDecision::Redirect(Route::Login),
        _ => GuardDecision::Pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_home_redirects_to_login() {
        assert_eq!(decide("/", false), GuardDecision::Redirect(Route::Login));
        assert_eq!(decide("/login", false), GuardDecision::Pass);
    }

    #[test]
    fn authenticated_login_redirects_home() {
        assert_eq!(decide("/login", true), GuardDecision::Redirect(Route::Home));
        assert_eq!(decide("/", true), GuardDecision::Pass);
    }

    #[test]
    fn unguarded_paths_pass() {
        assert_eq!(decide("/health", false), GuardDecision::Pass);
        assert_eq!(decide("/login/extra", true), GuardDecision::Pass);
    }
}
