//! Download module for staging data files.
//!
//! This module provides:
//! - The download tool abstraction and its external-program backend
//! - A built-in HTTP backend
//! - The sequential data fetcher

pub mod fetch;
pub mod http;
pub mod tool;

pub use fetch::{fetch_data, DataFetcher, FetchOutcome};
pub use http::HttpTool;
pub use tool::{DownloadTool, ExternalTool};
