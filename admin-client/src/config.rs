//! Client configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | API_BASE_URL | http://localhost:5000/api | REST backend prefix |
//! | ASSET_BASE_URL | http://localhost:5000/ | Prefix for stored image paths |
//! | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
//! | ADMIN_TOKEN_FILE | $HOME/.food-admin/session.json | Token store location |

use std::path::PathBuf;
use std::sync::Arc;

use crate::session::{DetachedStore, FileTokenStore, Session, TokenStore};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:5000/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the REST backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend prefix, endpoints are appended verbatim (e.g. "/orders")
    pub api_base_url: String,

    /// Prefix for relative image paths returned by the backend
    pub asset_base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Token file; `None` means no persistent storage is available
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a configuration for the given backend prefix
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            token_path: None,
        }
    }

    /// Load from `.env` and the process environment
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let token_path = std::env::var("ADMIN_TOKEN_FILE")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".food-admin").join("session.json"))
            });

        Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
            asset_base_url: std::env::var("ASSET_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ASSET_BASE_URL.into()),
            timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            token_path,
        }
    }

    /// Set the asset base URL
    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the token at `path`
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Full URL of a stored asset
    pub fn asset_url(&self, relative_path: &str) -> String {
        format!("{}{}", self.asset_base_url, relative_path)
    }

    /// Build the session over the configured token store
    pub fn build_session(&self) -> Session {
        let store: Arc<dyn TokenStore> = match &self.token_path {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())),
            None => Arc::new(DetachedStore),
        };
        Session::new(store)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
