//! Client-side route guard
//!
//! Evaluated before the dashboard mounts, against the same [`Session`] the
//! edge guard uses.

use shared::route::{self, GuardDecision, Route};

use crate::Session;

/// Route guard bound to a session
#[derive(Debug, Clone)]
pub struct ClientGuard {
    session: Session,
}

impl ClientGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Decide a navigation to `path`
    pub fn check(&self, path: &str) -> GuardDecision {
        let decision = route::decide(path, self.session.is_authenticated());
        if let GuardDecision::Redirect(target) = decision {
            tracing::debug!(from = path, to = target.path(), "Route guard redirect");
        }
        decision
    }

    /// Decide a navigation to a guarded route
    pub fn navigate(&self, target: Route) -> GuardDecision {
        self.check(target.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_session() {
        let session = Session::in_memory();
        let guard = ClientGuard::new(session.clone());

        assert_eq!(
            guard.navigate(Route::Home),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(guard.navigate(Route::Login), GuardDecision::Pass);

        session.login("token").unwrap();
        assert_eq!(guard.navigate(Route::Home), GuardDecision::Pass);
        assert_eq!(
            guard.navigate(Route::Login),
            GuardDecision::Redirect(Route::Home)
        );
    }
}
