//! Configuration structures and loading logic.

use crate::config::environment::EnvironmentMode;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when no platform config directory is available.
pub const FALLBACK_CONFIG_FILE: &str = "notebook-data.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How the execution environment is decided.
    #[serde(default)]
    pub environment: EnvironmentMode,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Path resolution configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Override root holding one directory per project.
    #[serde(default)]
    pub project_root: Option<PathBuf>,

    /// Root whose `data/` folder is used when no override root is set.
    #[serde(default)]
    pub default_root: Option<PathBuf>,
}

/// Data fetching configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL; files are fetched from `<repo_url>/data/<filename>`.
    #[serde(default)]
    pub repo_url: Option<String>,

    /// Files to fetch, in order.
    #[serde(default)]
    pub filenames: Vec<String>,

    /// Directory downloads are written to (defaults to the working directory).
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Which download backend to use.
    #[serde(default)]
    pub backend: DownloadBackend,

    /// Program spawned by the external backend.
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            repo_url: None,
            filenames: Vec::new(),
            destination: None,
            backend: DownloadBackend::default(),
            program: default_program(),
        }
    }
}

/// Available download backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadBackend {
    /// Spawn an external download utility (default).
    #[default]
    External,
    /// Built-in HTTP client.
    Http,
}

impl fmt::Display for DownloadBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadBackend::External => write!(f, "external"),
            DownloadBackend::Http => write!(f, "http"),
        }
    }
}

fn default_program() -> String {
    "wget".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one with `notebook-data init-config`",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "notebook-data")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_CONFIG_FILE))
    }

    /// Get the effective download directory.
    pub fn destination(&self) -> PathBuf {
        self.fetch
            .destination
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
