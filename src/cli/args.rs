//! Command-line argument definitions using clap.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DownloadBackend, EnvironmentMode};

/// Notebook data staging CLI.
#[derive(Parser, Debug)]
#[command(
    name = "notebook-data",
    version,
    about = "Resolve and stage project data files",
    long_about = "Locate a project's data files on a local checkout or under an override root,\n\
                  and download them into the working directory when running in a hosted notebook."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// How to decide the execution environment.
    #[arg(long = "env", value_enum, global = true, env = "NOTEBOOK_DATA_ENV")]
    pub environment: Option<EnvironmentModeArg>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the path a data file should be read from.
    Resolve {
        /// Project directory name under the override root.
        project_dir: String,

        /// Name of the file in the data/ directory.
        filename: String,

        #[command(flatten)]
        roots: RootArgs,
    },

    /// Download data files into the working directory (hosted notebook only).
    Fetch(FetchArgs),

    /// Show the decided environment and data roots.
    Env {
        /// Print as JSON.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        roots: RootArgs,
    },

    /// Write a default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Data root overrides.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RootArgs {
    /// Override root holding one directory per project.
    #[arg(long, env = "PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Root whose data/ folder is used when no override root is set.
    #[arg(long)]
    pub default_root: Option<PathBuf>,
}

/// Fetch subcommand arguments.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FetchArgs {
    /// Base URL; files are fetched from <URL>/data/<FILE>.
    #[arg(short = 'u', long)]
    pub repo_url: Option<String>,

    /// Directory to download into.
    #[arg(short = 'd', long = "dest")]
    pub destination: Option<PathBuf>,

    /// Download backend.
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Program used by the external backend.
    #[arg(long)]
    pub program: Option<String>,

    /// Files to fetch; replaces the configured list.
    pub files: Vec<String>,
}

/// CLI environment mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EnvironmentModeArg {
    /// Detect from platform marker variables.
    Auto,
    /// Behave as a local checkout.
    Local,
    /// Behave as the hosted notebook platform.
    Hosted,
}

impl From<EnvironmentModeArg> for EnvironmentMode {
    fn from(arg: EnvironmentModeArg) -> Self {
        match arg {
            EnvironmentModeArg::Auto => EnvironmentMode::Auto,
            EnvironmentModeArg::Local => EnvironmentMode::Local,
            EnvironmentModeArg::Hosted => EnvironmentMode::Hosted,
        }
    }
}

/// CLI download backend argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackendArg {
    /// Spawn an external download utility.
    External,
    /// Use the built-in HTTP client.
    Http,
}

impl From<BackendArg> for DownloadBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::External => DownloadBackend::External,
            BackendArg::Http => DownloadBackend::Http,
        }
    }
}

impl RootArgs {
    fn merge_into_config(&self, config: &mut Config) {
        if let Some(root) = &self.project_root {
            config.paths.project_root = Some(root.clone());
        }

        if let Some(root) = &self.default_root {
            config.paths.default_root = Some(root.clone());
        }
    }
}

impl FetchArgs {
    fn merge_into_config(&self, config: &mut Config) {
        if let Some(url) = &self.repo_url {
            config.fetch.repo_url = Some(url.clone());
        }

        if let Some(dest) = &self.destination {
            config.fetch.destination = Some(dest.clone());
        }

        if let Some(backend) = self.backend {
            config.fetch.backend = backend.into();
        }

        if let Some(program) = &self.program {
            config.fetch.program = program.clone();
        }

        if !self.files.is_empty() {
            config.fetch.filenames = self.files.clone();
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(mode) = self.environment {
            config.environment = mode.into();
        }

        match &self.command {
            Command::Resolve { roots, .. } | Command::Env { roots, .. } => {
                roots.merge_into_config(config)
            }
            Command::Fetch(fetch) => fetch.merge_into_config(config),
            Command::InitConfig { .. } => {}
        }
    }
}
