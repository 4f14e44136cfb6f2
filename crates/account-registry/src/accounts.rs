//! Registry plus its backing snapshot file.

use crate::error::RegistrationError;
use crate::registry::{Credential, Registration, Registry, REGISTERED};
use snapshot_store::{Store, StoreError};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

/// Shared account service.
///
/// Every successful mutation rewrites the whole registry file. Save
/// failures are logged and the in-memory change is kept.
pub struct Accounts {
    registry: RwLock<Registry>,
    store: Store,
}

impl Accounts {
    /// Wrap an already loaded registry.
    pub fn new(registry: Registry, store: Store) -> Self {
        Self {
            registry: RwLock::new(registry),
            store,
        }
    }

    /// Load the registry from `store`.
    pub async fn load(store: Store) -> Result<Self, StoreError> {
        let registry: Registry = store.load().await?;
        info!("Loaded registry with {} users", registry.count());
        Ok(Self::new(registry, store))
    }

    /// Register a new user and persist the registry.
    #[instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(
        &self,
        registration: Registration,
    ) -> Result<&'static str, RegistrationError> {
        let mut registry = self.registry.write().await;
        registry.register(registration)?;
        info!("Registered user (total: {})", registry.count());

        self.persist(&registry).await;
        Ok(REGISTERED)
    }

    /// Check a login attempt.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Option<Credential> {
        let registry = self.registry.read().await;
        let credential = registry.authenticate(username, password).cloned();
        if credential.is_none() {
            info!("Login rejected");
        }
        credential
    }

    /// Remove every registered user and persist the empty registry.
    pub async fn clear_all(&self) -> usize {
        let mut registry = self.registry.write().await;
        let removed = registry.count();
        registry.clear();
        info!("Cleared {} registered users", removed);

        self.persist(&registry).await;
        removed
    }

    /// Get the number of registered users.
    pub async fn count(&self) -> usize {
        self.registry.read().await.count()
    }

    async fn persist(&self, registry: &Registry) {
        if let Err(e) = self.store.save(registry).await {
            warn!("Failed to save registry: {}", e);
        }
    }
}
