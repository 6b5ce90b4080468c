//! Persisted authentication token storage
//!
//! The presence of the stored token is the single authentication signal for
//! the whole client. Stores are injected into [`crate::ApiClient`] so tests
//! can substitute an in-memory double.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::error;

/// File name the token is persisted under (the client-side storage key)
pub const AUTH_TOKEN_KEY: &str = "vidora_auth_token";

/// Storage for the single bearer token
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn get(&self) -> Option<String>;
    /// Replace the stored token
    fn set(&self, token: &str);
    /// Remove the stored token
    fn clear(&self);
}

/// In-memory token store, used in tests and short-lived sessions
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: &str) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// Token store backed by a single file under the given directory
///
/// Storage failures are logged and otherwise ignored; a token that cannot be
/// persisted simply behaves as an anonymous session on the next start.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(AUTH_TOKEN_KEY),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        if let Err(err) = std::fs::write(&self.path, token) {
            error!("Failed to persist auth token to {:?}: {}", self.path, err);
        }
    }

    fn clear(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                error!("Failed to clear auth token at {:?}: {}", self.path, err);
            }
        }
    }
}
