//! Data file path resolution.

use std::path::{Path, PathBuf};

use crate::config::{Config, Environment};
use crate::error::Result;

/// Environment variable naming the override root directory.
pub const PROJECT_ROOT_VAR: &str = "PROJECT_ROOT";

/// Name of the folder data files live in.
pub const DATA_DIR: &str = "data";

/// Directory holding the crate sources.
const SOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

/// Root used when no override root is set: the parent of the source directory.
///
/// The source folder is expected to sit next to `data/`. The location is fixed
/// at build time, so a relocated checkout needs an explicit root.
pub fn default_root() -> PathBuf {
    let source_dir = Path::new(SOURCE_DIR);
    source_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source_dir.to_path_buf())
}

/// Resolves where a project's data file should be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPathResolver {
    environment: Environment,
    project_root: Option<PathBuf>,
    default_root: PathBuf,
}

impl DataPathResolver {
    /// Create a resolver with no override root and the built-in default root.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            project_root: None,
            default_root: default_root(),
        }
    }

    /// Create a resolver, reading the override root from `PROJECT_ROOT`.
    pub fn from_env(environment: Environment) -> Self {
        let project_root = std::env::var_os(PROJECT_ROOT_VAR).map(PathBuf::from);
        Self::new(environment).with_project_root(project_root)
    }

    /// Create a resolver from the path settings of a loaded config.
    pub fn from_config(config: &Config, environment: Environment) -> Self {
        let resolver = Self::new(environment).with_project_root(config.paths.project_root.clone());
        match &config.paths.default_root {
            Some(root) => resolver.with_default_root(root.clone()),
            None => resolver,
        }
    }

    /// Set the override root. An empty path counts as unset.
    pub fn with_project_root(mut self, project_root: Option<PathBuf>) -> Self {
        self.project_root = project_root.filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn with_default_root(mut self, default_root: PathBuf) -> Self {
        self.default_root = default_root;
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn default_root(&self) -> &Path {
        &self.default_root
    }

    /// Directory data files are read from, or `None` in the hosted notebook,
    /// where files are staged in the working directory.
    pub fn data_dir(&self, project_dir: &str) -> Option<PathBuf> {
        if self.environment.running_in_hosted_notebook() {
            return None;
        }

        let dir = match &self.project_root {
            Some(root) => root.join(project_dir).join(DATA_DIR),
            None => self.default_root.join(DATA_DIR),
        };
        Some(dir)
    }

    /// Get the path to a data file.
    ///
    /// Inputs are not validated; a bad filename yields a path that fails when opened.
    pub fn resolve(&self, project_dir: &str, filename: &str) -> PathBuf {
        match self.data_dir(project_dir) {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}

/// Resolve a data file path, reading the override root from the process environment.
pub fn get_data_path(environment: Environment, project_dir: &str, filename: &str) -> PathBuf {
    DataPathResolver::from_env(environment).resolve(project_dir, filename)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_root() {
        let resolver = DataPathResolver::new(Environment::Local)
            .with_project_root(Some(PathBuf::from("/srv/projects")));

        let path = resolver.resolve("agec-101", "prices.csv");
        assert_eq!(
            path,
            Path::new("/srv/projects")
                .join("agec-101")
                .join("data")
                .join("prices.csv")
        );
    }

    #[test]
    fn test_default_root() {
        let resolver = DataPathResolver::new(Environment::Local);
        let path = resolver.resolve("ignored", "prices.csv");

        assert!(path.ends_with("data/prices.csv"));
        let grandparent = path.parent().and_then(Path::parent).unwrap();
        assert_eq!(grandparent, default_root());
        assert_eq!(Some(grandparent), Path::new(SOURCE_DIR).parent());
    }

    #[test]
    fn test_injected_default_root() {
        let resolver =
            DataPathResolver::new(Environment::Local).with_default_root(PathBuf::from("/work"));
        assert_eq!(
            resolver.resolve("agec-101", "a.csv"),
            PathBuf::from("/work/data/a.csv")
        );
    }

    #[test]
    fn test_empty_override_is_unset() {
        let resolver = DataPathResolver::new(Environment::Local)
            .with_project_root(Some(PathBuf::new()))
            .with_default_root(PathBuf::from("/work"));
        assert_eq!(resolver.project_root(), None);
        assert_eq!(
            resolver.resolve("agec-101", "a.csv"),
            PathBuf::from("/work/data/a.csv")
        );
    }

    #[test]
    fn test_hosted_returns_filename() {
        let resolver = DataPathResolver::new(Environment::HostedNotebook)
            .with_project_root(Some(PathBuf::from("/srv/projects")));

        assert_eq!(
            resolver.resolve("agec-101", "prices.csv"),
            PathBuf::from("prices.csv")
        );
        assert_eq!(resolver.data_dir("agec-101"), None);
    }

    #[test]
    fn test_malformed_input_is_passed_through() {
        let resolver =
            DataPathResolver::new(Environment::Local).with_default_root(PathBuf::from("/work"));
        assert_eq!(
            resolver.resolve("", "../missing.csv"),
            PathBuf::from("/work/data/../missing.csv")
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.paths.default_root = Some(PathBuf::from("/checkout"));

        let resolver = DataPathResolver::from_config(&config, Environment::Local);
        assert_eq!(resolver.project_root(), None);
        assert_eq!(
            resolver.resolve("p", "a.csv"),
            PathBuf::from("/checkout/data/a.csv")
        );

        config.paths.project_root = Some(PathBuf::from("/srv"));
        let resolver = DataPathResolver::from_config(&config, Environment::Local);
        assert_eq!(
            resolver.resolve("p", "a.csv"),
            PathBuf::from("/srv/p/data/a.csv")
        );
    }

    #[test]
    fn test_from_env_reads_project_root() {
        std::env::set_var(PROJECT_ROOT_VAR, "/env/root");
        let path = get_data_path(Environment::Local, "agec-101", "a.csv");
        let hosted = get_data_path(Environment::HostedNotebook, "agec-101", "a.csv");
        std::env::remove_var(PROJECT_ROOT_VAR);

        assert_eq!(path, PathBuf::from("/env/root/agec-101/data/a.csv"));
        assert_eq!(hosted, PathBuf::from("a.csv"));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b");
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
        ensure_dir(&target).unwrap();
    }
}
