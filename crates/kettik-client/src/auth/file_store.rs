/*
[INPUT]:  Storage directory and access tokens
[OUTPUT]: Token store surviving process restarts
[POS]:    Auth layer - durable token persistence
[UPDATE]: When session file format or location changes
*/

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::store::{TokenStore, validate_token};
use crate::http::Result;

/// Key the credential is stored under
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// File name of the session document inside the store directory
pub const SESSION_FILE_NAME: &str = "session.json";

/// Token store backed by a JSON document on disk
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileTokenStore {
    /// Open (or create) the store in `dir`
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(SESSION_FILE_NAME);
        let cached = Self::load(&path);
        debug!(path = %path.display(), present = cached.is_some(), "opened token store");

        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    /// Location of the session document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Option<String> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable session file");
                return None;
            }
        };

        let document: Map<String, Value> = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "corrupt session file ignored");
                return None;
            }
        };

        document
            .get(ACCESS_TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|token| !token.trim().is_empty())
            .map(str::to_string)
    }

    fn write(&self, token: &str) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "session path has no parent"))?;
        fs::create_dir_all(dir)?;

        let mut document = Map::new();
        document.insert(ACCESS_TOKEN_KEY.to_string(), Value::from(token));

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(serde_json::to_string_pretty(&document)?.as_bytes())?;
        temp_file.flush()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(temp_file.path(), fs::Permissions::from_mode(0o600))?;
        }

        temp_file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        validate_token(token)?;
        // disk first, so a failed write leaves the old session intact
        self.write(token)?;
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        // memory first: a revoked token must not outlive a failed delete
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.remove()
    }
}
