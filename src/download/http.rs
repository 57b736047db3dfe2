//! Built-in HTTP download backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::download::tool::DownloadTool;
use crate::error::{Error, Result};
use crate::fs::file_name_from_url;

/// Downloads with `reqwest`, for runtimes without an external download utility.
#[derive(Debug, Clone, Default)]
pub struct HttpTool {
    client: Client,
}

impl HttpTool {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DownloadTool for HttpTool {
    fn name(&self) -> &str {
        "http"
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<PathBuf> {
        let output_path = destination.join(file_name_from_url(url)?);

        let response = self.client.get(url).send().await?.error_for_status()?;

        // Stream to file
        let mut file = File::create(&output_path).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
        }

        file.flush().await?;

        Ok(output_path)
    }
}
