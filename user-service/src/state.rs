//! Application state management

use std::sync::Arc;

use crate::{config::Config, store::UserStore};

/// Application state shared across handlers
///
/// Cloning is cheap: the config and the store are reference counted, so
/// every clone sees the same users.
#[derive(Clone, Default)]
pub struct AppState {
    config: Arc<Config>,
    users: Arc<UserStore>,
}

impl AppState {
    /// Create a new AppState with an empty user store
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(UserStore::new()))
    }

    /// Create a new AppState around an existing store
    pub fn with_store(config: Config, users: Arc<UserStore>) -> Self {
        Self {
            config: Arc::new(config),
            users,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user store
    pub fn users(&self) -> &Arc<UserStore> {
        &self.users
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service", &self.config.service.name)
            .finish_non_exhaustive()
    }
}
