//! notebook-data - locate and stage project data files.
//!
//! Notebooks and scripts read their data from a `data/` folder. Where that
//! folder lives depends on where the code runs:
//!
//! - On a local checkout the folder sits next to the source folder, or under
//!   `$PROJECT_ROOT/<project>/` when an override root is set.
//! - In a hosted notebook the files are downloaded into the working directory
//!   at startup and read by bare filename.
//!
//! The environment is decided once by the caller and passed in.
//!
//! # Example
//!
//! ```no_run
//! use notebook_data::{DataFetcher, DataPathResolver, EnvironmentMode, ExternalTool};
//!
//! #[tokio::main]
//! async fn main() -> notebook_data::Result<()> {
//!     let environment = EnvironmentMode::Auto.detect();
//!
//!     let fetcher = DataFetcher::new(environment, Box::new(ExternalTool::wget()), ".");
//!     fetcher
//!         .fetch("https://raw.githubusercontent.com/user/repo/main", &["prices.csv"])
//!         .await?;
//!
//!     let path = DataPathResolver::from_env(environment).resolve("agec-101", "prices.csv");
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use config::{Config, DownloadBackend, Environment, EnvironmentMode};
pub use download::{fetch_data, DataFetcher, DownloadTool, ExternalTool, FetchOutcome, HttpTool};
pub use error::{Error, Result};
pub use fs::{get_data_path, DataPathResolver};
