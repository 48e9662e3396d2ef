/// Load error type.
///
/// Loading the image document is the only operation that can fail in a
/// way the user sees. Each variant names a cause; the `Display` text is
/// the message shown in the error banner.

use thiserror::Error;

/// Failure to load the image document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The document file could not be read.
    #[error("Failed to load image data from {path}: {reason}")]
    Read { path: String, reason: String },

    /// The HTTP request did not complete.
    #[error("Failed to load image data from {url}: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("Failed to load image data from {url}: server returned {status}")]
    Status { url: String, status: u16 },

    /// The document is not a JSON array of image records.
    #[error("Failed to load image data: malformed document ({reason})")]
    Malformed { reason: String },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed {
            reason: err.to_string(),
        }
    }
}
