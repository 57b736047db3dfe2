//! File and URL name handling.

use url::Url;

use crate::error::{Error, Result};

/// Build the URL of a data file: `<repo_url>/data/<filename>`.
///
/// Plain concatenation, the same URL the download tool is handed.
pub fn data_file_url(repo_url: &str, filename: &str) -> String {
    format!("{}/data/{}", repo_url, filename)
}

/// Name a downloaded file is saved under: the last path segment of its URL.
pub fn file_name_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    let name = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");

    sanitize_filename(name)
}

/// Validate a filename that will be written into the destination directory.
///
/// Returns an error if the filename is itself a relative directory reference.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name == "." || name == ".." {
        return Err(Error::Download(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(Error::Download(format!(
            "Invalid characters in filename: '{}'",
            name
        )));
    }

    if name.trim().is_empty() {
        return Err(Error::Download(
            "URL does not end in a file name".to_string(),
        ));
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_file_url() {
        assert_eq!(
            data_file_url("https://example.com/repo", "a.csv"),
            "https://example.com/repo/data/a.csv"
        );
        // Nested names are passed through as-is
        assert_eq!(
            data_file_url("https://example.com/repo", "raw/b.csv"),
            "https://example.com/repo/data/raw/b.csv"
        );
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://example.com/repo/data/a.csv").unwrap(),
            "a.csv"
        );
        assert_eq!(
            file_name_from_url("https://example.com/repo/data/b.csv?token=1").unwrap(),
            "b.csv"
        );
        assert_eq!(
            file_name_from_url("https://example.com/repo/data/prices..2020.csv").unwrap(),
            "prices..2020.csv"
        );
    }

    #[test]
    fn test_file_name_from_url_without_name() {
        assert!(file_name_from_url("https://example.com/repo/data/").is_err());
        assert!(file_name_from_url("not a url").is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("a.csv").unwrap(), "a.csv");
        assert_eq!(
            sanitize_filename("prices..2020.csv").unwrap(),
            "prices..2020.csv"
        );
        assert_eq!(sanitize_filename("..hidden").unwrap(), "..hidden");
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename(".").is_err());
        assert!(sanitize_filename("a\\b.csv").is_err());
        assert!(sanitize_filename("  ").is_err());
    }
}
