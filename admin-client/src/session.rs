// admin-client/src/session.rs
// Admin session over a pluggable token store

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::ClientResult;

/// Persistence for the admin bearer token.
///
/// Presence of a token is the whole authentication signal; tokens are never
/// validated or refreshed client-side.
pub trait TokenStore: std::fmt::Debug + Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// On-disk token file format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    admin_token: String,
}

/// JSON file token store
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Token file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        let stored: StoredToken = serde_json::from_str(&json).ok()?;
        Some(stored.admin_token)
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(&StoredToken {
            admin_token: token.to_string(),
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Process-local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok()?.clone()
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
        Ok(())
    }
}

/// Store used when no persistent storage exists; every operation is a no-op
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStore;

impl TokenStore for DetachedStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> ClientResult<()> {
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        Ok(())
    }
}

/// Admin session.
///
/// Cloned handles share one store, so the edge guard, the console guard and
/// the API client all read the same token.
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session kept in memory only
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Session without persistent storage
    pub fn detached() -> Self {
        Self::new(Arc::new(DetachedStore))
    }

    /// Current bearer token; empty tokens count as absent
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Whether a token presented with a request (e.g. a cookie) belongs to
    /// this session
    pub fn authorizes(&self, presented: Option<&str>) -> bool {
        match (self.token(), presented) {
            (Some(token), Some(presented)) => token == presented,
            _ => false,
        }
    }

    pub fn login(&self, token: &str) -> ClientResult<()> {
        self.store.save(token)?;
        tracing::info!("Admin session started");
        Ok(())
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.store.clear()?;
        tracing::info!("Admin session cleared");
        Ok(())
    }
}
