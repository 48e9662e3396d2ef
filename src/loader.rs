/// Image document loader
///
/// This module fetches the JSON document that lists every image record,
/// either from a local file or over HTTP, and turns it into a Catalog.
/// It runs once at startup; there is no retry, timeout or cancellation.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::LoadError;
use crate::state::catalog::Catalog;

/// Location of the image document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Path on the local filesystem
    File(PathBuf),
    /// http:// or https:// URL
    Remote(String),
}

impl DocumentSource {
    /// Interpret a location string: URLs with an http(s) scheme are
    /// fetched remotely, anything else is treated as a file path
    pub fn parse(location: &str) -> Self {
        if is_remote(location) {
            DocumentSource::Remote(location.to_string())
        } else {
            DocumentSource::File(PathBuf::from(location))
        }
    }

    /// Human-readable location for log lines
    pub fn describe(&self) -> String {
        match self {
            DocumentSource::File(path) => path.display().to_string(),
            DocumentSource::Remote(url) => url.clone(),
        }
    }
}

/// Check whether a location should be fetched over HTTP
pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Load the image document and build the catalog
///
/// # Returns
/// * `Ok(catalog)` - All records plus their distinct categories
/// * `Err(LoadError)` - Read failure, network failure, non-success
///   status or a malformed document
pub async fn load_catalog(source: DocumentSource) -> Result<Catalog, LoadError> {
    tracing::info!("📁 Loading image document from {}", source.describe());

    let bytes = match &source {
        DocumentSource::File(path) => {
            tokio::fs::read(path).await.map_err(|e| LoadError::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        }
        DocumentSource::Remote(url) => fetch_bytes(url).await?,
    };

    let catalog = Catalog::from_json(&bytes)?;

    tracing::info!(
        "✅ Loaded {} images in {} categories",
        catalog.len(),
        catalog.categories().len()
    );

    Ok(catalog)
}

/// Shared HTTP client for the document and preview downloads
fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Download a resource and return its body
///
/// Non-success statuses are errors; the body is not inspected.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = http_client()
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|e| LoadError::Request {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            DocumentSource::parse("https://example.com/images.json"),
            DocumentSource::Remote("https://example.com/images.json".to_string())
        );
        assert_eq!(
            DocumentSource::parse("HTTP://example.com/a.json"),
            DocumentSource::Remote("HTTP://example.com/a.json".to_string())
        );
        assert_eq!(
            DocumentSource::parse("data/images.json"),
            DocumentSource::File(PathBuf::from("data/images.json"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"title": "Sunset", "url": "sunset.jpg", "category": "Nature", "rating": 4.5}},
                {{"title": "City", "url": "city.jpg", "category": "Urban", "rating": 3}}
            ]"#
        )
        .unwrap();

        let catalog = load_catalog(DocumentSource::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories(), ["Nature", "Urban"]);
        assert_eq!(catalog.get(1).unwrap().rating, 3.0);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let result = load_catalog(DocumentSource::File(PathBuf::from(
            "/nonexistent/path/images.json",
        )))
        .await;
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"images": []}}"#).unwrap();

        let result = load_catalog(DocumentSource::File(file.path().to_path_buf())).await;
        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }
}
