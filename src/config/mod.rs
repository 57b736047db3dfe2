//! Configuration module for notebook-data.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Deciding the execution environment
//! - Configuration validation

pub mod environment;
pub mod loader;
pub mod validation;

pub use environment::{Environment, EnvironmentMode, HOSTED_NOTEBOOK_MARKERS};
pub use loader::{Config, DownloadBackend, FetchConfig, PathsConfig};
pub use validation::{validate_fetch_config, validate_program, validate_repo_url};
