/// Application configuration
///
/// All values are compile-time defaults; the gallery takes no command
/// line flags or environment variables.

use crate::loader::DocumentSource;

/// Where the image document lives, relative to the working directory
pub const DOCUMENT_LOCATION: &str = "images.json";

/// Size of generated previews (square bound)
pub const PREVIEW_SIZE: u32 = 256;

/// Width of a gallery card in logical pixels
pub const CARD_WIDTH: f32 = 220.0;

/// Height of the preview area on a card
pub const CARD_IMAGE_HEIGHT: f32 = 160.0;

/// Initial window size (width, height)
pub const WINDOW_SIZE: (f32, f32) = (1200.0, 800.0);

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Source of the image document
    pub document: DocumentSource,
    /// Longest edge of a decoded preview, in pixels
    pub preview_size: u32,
    pub card_width: f32,
    pub card_image_height: f32,
    pub window_size: (f32, f32),
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            document: DocumentSource::parse(DOCUMENT_LOCATION),
            preview_size: PREVIEW_SIZE,
            card_width: CARD_WIDTH,
            card_image_height: CARD_IMAGE_HEIGHT,
            window_size: WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_document_is_local_file() {
        let config = GalleryConfig::default();
        assert_eq!(
            config.document,
            DocumentSource::File(PathBuf::from("images.json"))
        );
        assert_eq!(config.preview_size, 256);
    }
}
