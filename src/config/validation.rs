//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Validate the settings needed to fetch data files.
pub fn validate_fetch_config(config: &Config) -> Result<()> {
    let repo_url = config
        .fetch
        .repo_url
        .as_deref()
        .ok_or_else(|| Error::MissingConfig("fetch.repo_url".to_string()))?;
    validate_repo_url(repo_url)?;
    validate_program(&config.fetch.program)?;

    Ok(())
}

/// Validate the repository base URL.
pub fn validate_repo_url(repo_url: &str) -> Result<()> {
    if repo_url.trim().is_empty() {
        return Err(Error::MissingConfig("fetch.repo_url".to_string()));
    }

    let url = Url::parse(repo_url)?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::ConfigValidation {
                field: "fetch.repo_url".to_string(),
                message: format!("Unsupported URL scheme '{}' (expected http or https)", other),
            })
        }
    }

    if repo_url.ends_with('/') {
        return Err(Error::ConfigValidation {
            field: "fetch.repo_url".to_string(),
            message: "URL must not end with '/' (\"/data/\" is appended to it)".to_string(),
        });
    }

    Ok(())
}

/// Validate the download program name.
pub fn validate_program(program: &str) -> Result<()> {
    if program.trim().is_empty() {
        return Err(Error::MissingConfig("fetch.program".to_string()));
    }

    Ok(())
}
