/*
[INPUT]:  Request descriptors and the shared token store
[OUTPUT]: Authenticated responses, or SessionExpired / NoCredential failures
[POS]:    HTTP layer - bearer injection and session invalidation on 401
[UPDATE]: When the authorization scheme or expiry handling changes
*/

use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{error, warn};

use crate::auth::TokenStore;
use crate::http::{ApiResponse, KettikClient, KettikError, RequestDescriptor, Result};

/// Wraps the executor with the stored bearer credential
#[derive(Debug, Clone)]
pub struct SessionGuard {
    client: KettikClient,
    store: Arc<dyn TokenStore>,
}

impl SessionGuard {
    pub fn new(client: KettikClient, store: Arc<dyn TokenStore>) -> Self {
        Self { client, store }
    }

    /// The unauthenticated executor
    pub fn client(&self) -> &KettikClient {
        &self.client
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Execute with `Authorization: Bearer <token>`.
    ///
    /// Fails with [`KettikError::NoCredential`] before any I/O when the
    /// store is empty. A 401 clears the store and yields
    /// [`KettikError::SessionExpired`] regardless of the body.
    pub async fn execute_authenticated(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        let token = self.store.get().ok_or(KettikError::NoCredential)?;
        let authed = descriptor.with_bearer(&token)?;

        match self.client.execute(&authed).await {
            Err(KettikError::Api { status, message })
                if status == StatusCode::UNAUTHORIZED.as_u16() =>
            {
                warn!(path = %descriptor.path, backend_message = %message, "credential rejected, ending session");
                if let Err(err) = self.store.clear() {
                    error!(error = %err, "failed to clear token store");
                }
                Err(KettikError::SessionExpired)
            }
            other => other,
        }
    }
}
