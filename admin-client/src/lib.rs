//! Admin Client - session and REST access for the food admin console
//!
//! - [`Session`] - token store backed admin session, the single source of
//!   truth for "is authenticated"
//! - [`ClientGuard`] - route guard evaluated before the dashboard mounts
//! - [`ApiClient`] - fetch wrapper adding the bearer token and content type
//! - [`ConsoleApi`] / [`RestConsoleApi`] - typed backend operations

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod guard;
pub mod http;
pub mod session;

pub use api::{ConsoleApi, RestConsoleApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::ClientGuard;
pub use http::{ApiClient, RequestBody};
pub use session::{DetachedStore, FileTokenStore, MemoryTokenStore, Session, TokenStore};

// Re-export shared types for convenience
pub use shared::{GuardDecision, Route};
