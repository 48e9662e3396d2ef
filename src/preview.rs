/// Card preview generation
///
/// Previews are fetched lazily for cards that appear in the result set,
/// decoded and downscaled on a blocking worker, and cached in memory for
/// the rest of the session. Nothing is written to disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::loader::{self, DocumentSource};

/// Where a preview's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    File(PathBuf),
    Remote(String),
}

impl PreviewSource {
    /// Resolve a record URL against the location of the image document
    ///
    /// Absolute http(s) URLs are used as-is. Relative ones are resolved
    /// against the document's directory or the document's URL.
    pub fn resolve(document: &DocumentSource, url: &str) -> Self {
        if loader::is_remote(url) {
            return PreviewSource::Remote(url.to_string());
        }

        match document {
            DocumentSource::File(path) => {
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                PreviewSource::File(base.join(url))
            }
            DocumentSource::Remote(base) => {
                let joined = reqwest::Url::parse(base)
                    .and_then(|base| base.join(url))
                    .map(|joined| joined.to_string())
                    .unwrap_or_else(|_| url.to_string());
                PreviewSource::Remote(joined)
            }
        }
    }
}

/// State of one preview in the cache
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(Handle),
    Failed,
}

/// Decoded preview pixels
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPixels {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major
    pub rgba: Vec<u8>,
}

/// In-memory preview cache keyed by record URL
#[derive(Debug, Default)]
pub struct PreviewCache {
    entries: HashMap<String, Preview>,
}

impl PreviewCache {
    pub fn get(&self, url: &str) -> Option<&Preview> {
        self.entries.get(url)
    }

    /// Mark the given URLs as loading and return the ones not requested before
    pub fn claim<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut claimed = Vec::new();
        for url in urls {
            if !self.entries.contains_key(url) {
                self.entries.insert(url.to_string(), Preview::Loading);
                claimed.push(url.to_string());
            }
        }
        claimed
    }

    /// Store the outcome of a preview request
    pub fn finish(&mut self, url: String, result: Result<Handle, String>) {
        let preview = match result {
            Ok(handle) => Preview::Ready(handle),
            Err(reason) => {
                tracing::warn!("⚠️  Preview unavailable for {}: {}", url, reason);
                Preview::Failed
            }
        };
        self.entries.insert(url, preview);
    }
}

/// Load a preview for a single image
///
/// # Arguments
/// * `source` - Resolved location of the image
/// * `size` - Longest edge of the generated preview
///
/// # Returns
/// * `Ok(handle)` - RGBA image handle ready for the renderer
/// * `Err(String)` - Error message if fetching or decoding fails
pub async fn load_preview(source: PreviewSource, size: u32) -> Result<Handle, String> {
    let bytes = match &source {
        PreviewSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        PreviewSource::Remote(url) => loader::fetch_bytes(url)
            .await
            .map_err(|e| e.to_string())?,
    };

    // Decoding is CPU-bound, keep it off the async workers
    let pixels = tokio::task::spawn_blocking(move || decode_preview(&bytes, size))
        .await
        .map_err(|e| format!("Task join error: {}", e))??;

    Ok(Handle::from_rgba(pixels.width, pixels.height, pixels.rgba))
}

/// Decode encoded image bytes and shrink them to fit a square of `size`
///
/// Images already smaller than the bound are kept at their size.
pub fn decode_preview(bytes: &[u8], size: u32) -> Result<PreviewPixels, String> {
    let img = image::load_from_memory(bytes).map_err(|e| format!("Failed to decode image: {}", e))?;

    let img = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(PreviewPixels {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
