//! Capture reader implementation using the image library.
//!
//! Decodes whatever container the camera produced (JPEG in practice, but PNG,
//! TIFF, WebP etc. work the same way) into 8-bit RGB samples.

use tracing::debug;

use crate::image_pipeline::capture::reader::CaptureReader;
use crate::image_pipeline::capture::types::DecodedImage;
use crate::image_pipeline::common::error::{ReportError, Result};

/// Capture reader backed by `image::load_from_memory`.
pub struct ImageCrateReader;

impl CaptureReader for ImageCrateReader {
    /// Decodes captured image bytes into RGB.
    ///
    /// Any colour type is converted to 8-bit RGB; an alpha channel is
    /// discarded without premultiplying. Empty input is treated as an absent
    /// capture.
    ///
    /// # Errors
    ///
    /// * `ReportError::DecodeFailure` - the bytes are empty or not a decodable image
    fn read_capture(&self, data: &[u8]) -> Result<DecodedImage> {
        if data.is_empty() {
            return Err(ReportError::DecodeFailure("no image data".to_string()));
        }

        debug!("Decoding captured image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ReportError::DecodeFailure(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(DecodedImage::from(decoded.to_rgb8()))
    }
}
