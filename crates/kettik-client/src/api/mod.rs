/*
[INPUT]:  Session guard (executor + token store)
[OUTPUT]: One typed method per backend operation
[POS]:    Domain layer - typed wrappers over the HTTP layer
[UPDATE]: When adding new endpoints
*/

// ### Domain API

pub mod auth;
pub mod payments;
pub mod profile;

use std::sync::Arc;

use crate::auth::TokenStore;
use crate::http::{KettikClient, Result, SessionGuard};

/// Typed entry point for every backend operation.
///
/// Auth-flow calls go through the plain executor, everything else
/// through the [`SessionGuard`]. Mutations issue a single request and keep
/// no local state; callers re-fetch to observe changes.
#[derive(Debug, Clone)]
pub struct KettikApi {
    guard: SessionGuard,
}

impl KettikApi {
    pub fn new(client: KettikClient, store: Arc<dyn TokenStore>) -> Self {
        Self {
            guard: SessionGuard::new(client, store),
        }
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        self.guard.store()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store().is_present()
    }

    /// Drop the stored credential; no request is sent
    pub fn logout(&self) -> Result<()> {
        tracing::info!("logging out");
        self.store().clear()
    }
}
