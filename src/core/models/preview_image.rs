use std::sync::Arc;

use anyhow::Context;
use image::RgbaImage;

use crate::core::models::FetchError;
use crate::global_constants;

/// A decoded thumbnail. Cloning is cheap: pixel data and the original encoded
/// bytes are shared.
#[derive(Clone)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    encoded: Arc<[u8]>,
    pixels: Arc<RgbaImage>,
}

impl std::fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("encoded_len", &self.encoded.len())
            .finish()
    }
}

impl PreviewImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, FetchError> {
        let decoded = image::load_from_memory(bytes)?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(FetchError::EmptyImage);
        }

        log::debug!(
            "[PREVIEW_IMAGE] decoded {}x{} image from {} bytes",
            decoded.width(),
            decoded.height(),
            bytes.len()
        );

        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            encoded: Arc::from(bytes),
            pixels: Arc::new(decoded.to_rgba8()),
        })
    }

    /// Bundled Wikipedia logo used for results whose thumbnail is absent or
    /// failed to load. Load it once at startup and share the clone.
    pub fn bundled_placeholder() -> anyhow::Result<Self> {
        Self::decode(global_constants::PLACEHOLDER_LOGO_PNG)
            .context("Failed to decode bundled placeholder logo")
    }

    pub fn encoded_bytes(&self) -> &[u8] {
        &self.encoded
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Dimensions scaled down to fit a `max_size` square, keeping aspect ratio.
    pub fn fitted_size(&self, max_size: u32) -> (u32, u32) {
        if self.width <= max_size && self.height <= max_size {
            return (self.width, self.height);
        }

        let scale = max_size as f64 / self.width.max(self.height) as f64;
        let width = ((self.width as f64 * scale).round() as u32).max(1);
        let height = ((self.height as f64 * scale).round() as u32).max(1);
        (width, height)
    }

    pub fn same_image(&self, other: &PreviewImage) -> bool {
        Arc::ptr_eq(&self.encoded, &other.encoded)
    }
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]));
    let mut buffer = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
        .unwrap();
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_png() {
        let bytes = encode_test_png(40, 20);

        let image = PreviewImage::decode(&bytes).unwrap();

        assert_eq!(image.width, 40);
        assert_eq!(image.height, 20);
        assert_eq!(image.encoded_bytes(), bytes.as_slice());
        assert_eq!(image.pixels().dimensions(), (40, 20));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let error = PreviewImage::decode(b"definitely not an image").unwrap_err();

        assert!(matches!(error, FetchError::ImageDecode(_)));
    }

    #[test]
    fn test_bundled_placeholder_decodes() {
        let placeholder = PreviewImage::bundled_placeholder().unwrap();

        assert!(placeholder.width > 0);
        assert!(placeholder.height > 0);
    }

    #[test]
    fn test_fitted_size_keeps_aspect_ratio() {
        let image = PreviewImage::decode(&encode_test_png(200, 100)).unwrap();

        assert_eq!(image.fitted_size(100), (100, 50));
        assert_eq!(image.fitted_size(400), (200, 100));
    }

    #[test]
    fn test_clones_share_the_same_image() {
        let image = PreviewImage::decode(&encode_test_png(4, 4)).unwrap();
        let other = PreviewImage::decode(&encode_test_png(4, 4)).unwrap();

        assert!(image.same_image(&image.clone()));
        assert!(!image.same_image(&other));
    }
}
