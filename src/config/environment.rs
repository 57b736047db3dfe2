//! Execution environment definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variables set by the hosted notebook platform inside its runtimes.
pub const HOSTED_NOTEBOOK_MARKERS: &[&str] = &["COLAB_RELEASE_TAG", "COLAB_BACKEND_VERSION"];

/// How the execution environment is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    /// Detect from platform marker variables (default).
    #[default]
    Auto,
    /// Always behave as a local checkout.
    Local,
    /// Always behave as the hosted notebook platform.
    Hosted,
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentMode::Auto => write!(f, "auto"),
            EnvironmentMode::Local => write!(f, "local"),
            EnvironmentMode::Hosted => write!(f, "hosted"),
        }
    }
}

impl EnvironmentMode {
    /// Decide the environment from the process environment.
    pub fn detect(self) -> Environment {
        self.resolve(|key| std::env::var(key).ok())
    }

    /// Decide the environment, looking up marker variables through `lookup`.
    ///
    /// A missing or empty marker simply means "not hosted".
    pub fn resolve<F>(self, lookup: F) -> Environment
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            EnvironmentMode::Local => Environment::Local,
            EnvironmentMode::Hosted => Environment::HostedNotebook,
            EnvironmentMode::Auto => {
                let hosted = HOSTED_NOTEBOOK_MARKERS
                    .iter()
                    .any(|key| lookup(key).is_some_and(|v| !v.trim().is_empty()));
                if hosted {
                    Environment::HostedNotebook
                } else {
                    Environment::Local
                }
            }
        }
    }
}

/// The execution environment, decided once by the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Local,
    HostedNotebook,
}

impl Environment {
    pub fn running_in_hosted_notebook(self) -> bool {
        self == Environment::HostedNotebook
    }
}

impl From<bool> for Environment {
    fn from(running_in_hosted_notebook: bool) -> Self {
        if running_in_hosted_notebook {
            Environment::HostedNotebook
        } else {
            Environment::Local
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Local => write!(f, "local"),
            Environment::HostedNotebook => write!(f, "hosted notebook"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_vars(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_explicit_modes_ignore_markers() {
        let all = |_: &str| Some("1".to_string());
        assert_eq!(EnvironmentMode::Local.resolve(all), Environment::Local);
        assert_eq!(
            EnvironmentMode::Hosted.resolve(no_vars),
            Environment::HostedNotebook
        );
    }

    #[test]
    fn test_auto_without_markers_is_local() {
        assert_eq!(EnvironmentMode::Auto.resolve(no_vars), Environment::Local);
    }

    #[test]
    fn test_auto_with_marker_is_hosted() {
        let lookup = |key: &str| (key == "COLAB_RELEASE_TAG").then(|| "release-1".to_string());
        assert_eq!(
            EnvironmentMode::Auto.resolve(lookup),
            Environment::HostedNotebook
        );
    }

    #[test]
    fn test_auto_ignores_empty_marker() {
        let lookup = |_: &str| Some("  ".to_string());
        assert_eq!(EnvironmentMode::Auto.resolve(lookup), Environment::Local);
    }

    #[test]
    fn test_from_bool() {
        assert!(Environment::from(true).running_in_hosted_notebook());
        assert!(!Environment::from(false).running_in_hosted_notebook());
    }
}
