use std::sync::Arc;
use tokio::sync::RwLock;

use healthguard_protocol::UserData;

use super::storage::{LocalStorage, StorageError, TOKEN_KEY};

/// Client-side session: the token and, when known, the user it belongs to.
///
/// Only the token is persisted. After a restart the session is authenticated
/// but the user is unknown until the next login.
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<RwLock<SessionInner>>,
    storage: Arc<dyn LocalStorage>,
}

#[derive(Debug, Default)]
pub struct SessionInner {
    pub auth_token: Option<String>,
    pub current_user: Option<UserData>,
}

impl SessionState {
    /// Build the session, reading the stored token once
    pub fn load(storage: Arc<dyn LocalStorage>) -> Self {
        let auth_token = storage.get_item(TOKEN_KEY);

        if auth_token.is_some() {
            tracing::info!("Restored session from local storage");
        }

        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                auth_token,
                current_user: None,
            })),
            storage,
        }
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, SessionInner> {
        self.inner.read().await
    }

    pub async fn set_auth(&self, token: String, user: Option<UserData>) {
        let stored = token.clone();
        self.persist("persist session token", move |storage| {
            storage.set_item(TOKEN_KEY, &stored)
        })
        .await;

        let mut state = self.inner.write().await;
        state.auth_token = Some(token);
        state.current_user = user;
    }

    pub async fn clear_auth(&self) {
        self.persist("remove session token", |storage| storage.remove_item(TOKEN_KEY))
            .await;

        let mut state = self.inner.write().await;
        state.auth_token = None;
        state.current_user = None;
    }

    /// Run a storage write off the async workers. Failures are logged only.
    async fn persist<F>(&self, action: &str, write: F)
    where
        F: FnOnce(&dyn LocalStorage) -> Result<(), StorageError> + Send + 'static,
    {
        let storage = self.storage.clone();

        match tokio::task::spawn_blocking(move || write(storage.as_ref())).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Failed to {}: {}", action, e),
            Err(e) => tracing::error!("Storage task failed to {}: {}", action, e),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.auth_token.is_some()
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.auth_token.clone()
    }

    pub async fn user(&self) -> Option<UserData> {
        self.inner.read().await.current_user.clone()
    }
}
