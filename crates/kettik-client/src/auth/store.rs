/*
[INPUT]:  Access tokens returned by code verification
[OUTPUT]: Token retrieval for the session guard
[POS]:    Auth layer - token store contract and in-memory implementation
[UPDATE]: When adding token metadata or changing the store contract
*/

use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};

use crate::http::{KettikError, Result};

/// Holder of the single bearer credential.
///
/// `set` overwrites any previous value; a later `get` from any holder of
/// the same store observes the change.
pub trait TokenStore: Send + Sync + Debug {
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;

    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

pub(crate) fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(KettikError::Config("access token cannot be empty".to_string()));
    }
    Ok(())
}

/// Process-local token store
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        validate_token(token)?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
