use crate::contract::ContractVersion;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "ytsum.toml";
pub const SERVICE_URL_ENV: &str = "YTSUM_SERVICE_URL";

pub const DEFAULT_BASE_URL: &str = "https://ytsum.herokuapp.com";
pub const DEFAULT_ENDPOINT: &str = "summarize/";
const DEFAULT_TIMEOUT_SECS: u64 = 600;
const DEFAULT_USER_AGENT: &str = concat!("ytsum/", env!("CARGO_PKG_VERSION"));

/// Remote summarization service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Which affordances the front-end offers after a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Affordances {
    pub download: bool,
    pub try_again: bool,
}

impl Default for Affordances {
    fn default() -> Self {
        Self {
            download: true,
            try_again: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub contract: ContractVersion,
    pub ui: Affordances,
}

impl Config {
    /// Load from the standard locations, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::read(&path)?,
            None => {
                debug!("no config file found, using defaults");
                Config::default()
            }
        };
        config.apply_env();
        Ok(config)
    }

    /// Load from an explicit path; a missing file is an error here
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env();
        Ok(config)
    }

    /// The variant without download or try-again, speaking the list payload
    pub fn legacy() -> Self {
        Self {
            contract: ContractVersion::V1,
            ui: Affordances {
                download: false,
                try_again: false,
            },
            ..Self::default()
        }
    }

    fn read(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// An empty value counts as unset
    fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVICE_URL_ENV)
            && !url.is_empty()
        {
            debug!(base_url = %url, "service URL overridden from environment");
            self.service.base_url = url;
        }
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::find_config_file_in(Path::new(""), dirs::home_dir().as_deref())
    }

    /// `<local_dir>/ytsum.toml` first, then `<home>/.config/ytsum/ytsum.toml`
    fn find_config_file_in(local_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
        let local_config = local_dir.join(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Some(local_config);
        }

        let home_config = home?.join(".config").join("ytsum").join(CONFIG_FILE_NAME);
        home_config.exists().then_some(home_config)
    }
}
