use gloo::storage::{LocalStorage, Storage};
use shared::{AppConfig, Session};

/// Persists the bearer token in local storage as a plain string (not JSON
/// encoded). Nothing else is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    key: String,
}

impl SessionStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            key: config.token_storage_key.clone(),
        }
    }

    /// Session from storage; anonymous when there is no readable token.
    pub fn load(&self) -> Session {
        LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten()
            .map(Session::with_token)
            .unwrap_or_default()
    }

    pub fn save(&self, token: &str) -> Result<Session, String> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|e| format!("{:?}", e))?;
        Ok(Session::with_token(token))
    }

    pub fn clear(&self) -> Session {
        LocalStorage::delete(&self.key);
        Session::anonymous()
    }
}
