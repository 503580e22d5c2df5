/*
[INPUT]:  Built-in defaults, optional YAML file, KETTIK_* environment, CLI flags
[OUTPUT]: Effective CLI settings and the client configuration derived from them
[POS]:    Configuration layer - CLI startup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use config::{Config, Environment, File, FileFormat};
use kettik_client::http::DEFAULT_BASE_URL;
use kettik_client::{ClientConfig, KettikClient};
use serde::{Deserialize, Serialize};

/// Directory name under the platform data directory
const APP_DIR_NAME: &str = "kettik";

/// Effective CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Backend base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Directory holding the session file
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Values given on the command line; they win over every other layer
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            data_dir: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load defaults, then the YAML file, then `KETTIK_*` variables, then flags
    pub fn load(path: Option<&Path>, overrides: CliOverrides) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("api_base", default_api_base())?
            .set_default("connect_timeout_secs", default_connect_timeout_secs())?;

        if let Some(path) = path {
            let name = path.to_str().context("config path must be valid utf-8")?;
            builder = builder.add_source(File::new(name, FileFormat::Yaml).required(true));
        }

        builder = builder.add_source(Environment::with_prefix("KETTIK").try_parsing(true));

        let mut config: Self = builder
            .build()
            .context("load config")?
            .try_deserialize()
            .context("parse config")?;

        if let Some(base_url) = overrides.base_url {
            config.api_base = base_url;
        }
        if let Some(data_dir) = overrides.data_dir {
            config.data_dir = Some(data_dir);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(anyhow!("api_base cannot be empty"));
        }
        KettikClient::with_config(self.client_config())
            .map_err(|err| anyhow!("invalid api_base {:?}: {err}", self.api_base))?;
        Ok(())
    }

    /// Session directory: configured, else `<platform data dir>/kettik`
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| anyhow!("Could not determine data directory")),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            ..ClientConfig::default()
        }
        .with_base_url(self.api_base.trim())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize config to YAML")
    }
}
