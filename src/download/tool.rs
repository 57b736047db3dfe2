//! Download tools: the seam between the fetcher and whatever performs the transfer.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::fs::file_name_from_url;

/// Something that can fetch a single URL into a directory.
#[async_trait]
pub trait DownloadTool: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Download `url` into `destination`, returning the written file's path.
    ///
    /// Must not return until the transfer has finished or failed.
    async fn download(&self, url: &str, destination: &Path) -> Result<PathBuf>;
}

/// Spawns an external download utility (`wget -q -O <name> <url>` by default).
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: String,
    args: Vec<String>,
    output_flag: Option<String>,
}

impl Default for ExternalTool {
    fn default() -> Self {
        Self::wget()
    }
}

impl ExternalTool {
    /// `wget` with progress output suppressed.
    ///
    /// The output name is passed with `-O`, so a re-run overwrites `a.csv`
    /// instead of writing `a.csv.1` next to it.
    pub fn wget() -> Self {
        Self::new("wget", ["-q"]).with_output_flag("-O")
    }

    /// A tool invoked as `<program> <args...> <url>` from the destination directory.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            output_flag: None,
        }
    }

    /// Pass the output file name as `<flag> <name>` before the URL.
    pub fn with_output_flag(mut self, flag: impl Into<String>) -> Self {
        self.output_flag = Some(flag.into());
        self
    }

    /// Build the tool for a configured program name. `wget` gets `-q`.
    pub fn for_program(program: &str) -> Self {
        if program == "wget" {
            Self::wget()
        } else {
            Self::new(program, Vec::<String>::new())
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn output_flag(&self) -> Option<&str> {
        self.output_flag.as_deref()
    }
}

#[async_trait]
impl DownloadTool for ExternalTool {
    fn name(&self) -> &str {
        &self.program
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<PathBuf> {
        let name = file_name_from_url(url)?;

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(flag) = &self.output_flag {
            command.arg(flag).arg(&name);
        }

        let output = command
            .arg(url)
            .current_dir(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::DownloadToolNotFound(self.program.clone())
                } else {
                    Error::Download(format!("Failed to run {}: {}", self.program, e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let status = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{} ({})", output.status, stderr)
            };
            return Err(Error::DownloadTool {
                program: self.program.clone(),
                url: url.to_string(),
                status,
            });
        }

        Ok(destination.join(name))
    }
}
