// Session store - Load on init, save on every mutation
use crate::application::authenticator::Authenticator;
use crate::application::snapshot::{load_snapshot, save_snapshot};
use crate::application::state_repository::StateRepository;
use crate::domain::errors::{DashboardError, StorageError};
use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionState {
    user: Option<User>,
}

pub struct SessionStore {
    repository: Arc<dyn StateRepository>,
    authenticator: Arc<dyn Authenticator>,
    key: String,
    user: RwLock<Option<User>>,
}

impl SessionStore {
    /// Build the store, hydrating the session from `key`.
    pub async fn load(
        repository: Arc<dyn StateRepository>,
        authenticator: Arc<dyn Authenticator>,
        key: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let key = key.into();
        let state: SessionState = load_snapshot(repository.as_ref(), &key)
            .await?
            .unwrap_or_default();

        match &state.user {
            Some(user) => tracing::info!(user = %user.name, role = %user.role, "Restored session"),
            None => tracing::debug!(key = %key, "No stored session"),
        }

        Ok(Self {
            repository,
            authenticator,
            key,
            user: RwLock::new(state.user),
        })
    }

    pub async fn current(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// Replace the session. Nothing changes if the write fails.
    pub async fn set_session(&self, user: Option<User>) -> Result<(), StorageError> {
        let mut guard = self.user.write().await;
        let state = SessionState { user };
        save_snapshot(self.repository.as_ref(), &self.key, &state).await?;
        *guard = state.user;
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, DashboardError> {
        let user = self.authenticator.authenticate(email, password).await?;
        self.set_session(Some(user.clone())).await?;
        tracing::info!(user = %user.name, role = %user.role, "Logged in");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), StorageError> {
        self.set_session(None).await?;
        tracing::info!("Logged out");
        Ok(())
    }
}
