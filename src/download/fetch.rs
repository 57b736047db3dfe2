//! Staging data files into the working directory of a hosted notebook.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{Config, DownloadBackend, Environment};
use crate::download::http::HttpTool;
use crate::download::tool::{DownloadTool, ExternalTool};
use crate::error::Result;
use crate::fs::{data_file_url, ensure_dir};
use crate::output::{print_info, print_success};

/// What a fetch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Not in the hosted notebook; nothing was downloaded.
    Skipped,
    /// Paths of the downloaded files, in request order.
    Downloaded(Vec<PathBuf>),
}

/// Downloads `<repo_url>/data/<filename>` files, only inside the hosted notebook.
pub struct DataFetcher {
    environment: Environment,
    tool: Box<dyn DownloadTool>,
    destination: PathBuf,
}

impl fmt::Debug for DataFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFetcher")
            .field("environment", &self.environment)
            .field("tool", &self.tool.name())
            .field("destination", &self.destination)
            .finish()
    }
}

impl DataFetcher {
    pub fn new(
        environment: Environment,
        tool: Box<dyn DownloadTool>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            environment,
            tool,
            destination: destination.into(),
        }
    }

    /// Build a fetcher from the configured backend and destination.
    pub fn from_config(config: &Config, environment: Environment) -> Self {
        let tool: Box<dyn DownloadTool> = match config.fetch.backend {
            DownloadBackend::External => Box::new(ExternalTool::for_program(&config.fetch.program)),
            DownloadBackend::Http => Box::new(HttpTool::default()),
        };
        Self::new(environment, tool, config.destination())
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Download each file in order.
    ///
    /// Outside the hosted notebook this only prints a notice. The first failing
    /// download aborts the batch and its error is returned.
    pub async fn fetch<S: AsRef<str>>(
        &self,
        repo_url: &str,
        filenames: &[S],
    ) -> Result<FetchOutcome> {
        if !self.environment.running_in_hosted_notebook() {
            print_info("Not in hosted notebook environment - skipping download");
            return Ok(FetchOutcome::Skipped);
        }

        ensure_dir(&self.destination)?;

        let mut downloaded = Vec::with_capacity(filenames.len());
        for filename in filenames {
            let filename = filename.as_ref();
            let url = data_file_url(repo_url, filename);
            tracing::debug!(tool = self.tool.name(), url = %url, "Downloading");

            let path = self.tool.download(&url, &self.destination).await?;
            print_success(&format!("Downloaded: {}", filename));
            downloaded.push(path);
        }

        tracing::info!(
            "Fetched {} file(s) into {}",
            downloaded.len(),
            self.destination.display()
        );
        Ok(FetchOutcome::Downloaded(downloaded))
    }
}

/// Fetch data files into the current directory with `wget`.
pub async fn fetch_data<S: AsRef<str>>(
    environment: Environment,
    repo_url: &str,
    filenames: &[S],
) -> Result<FetchOutcome> {
    let destination = std::env::current_dir()?;
    DataFetcher::new(environment, Box::new(ExternalTool::wget()), destination)
        .fetch(repo_url, filenames)
        .await
}
