//! Decoded capture types

use crate::image_pipeline::common::error::{ReportError, Result};

/// Number of interleaved samples per pixel.
pub const RGB_CHANNELS: usize = 3;

/// A captured image after decoding, as 8-bit RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Wraps interleaved RGB samples, rejecting buffers that do not match the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let image = Self { width, height, data };
        if !image.is_consistent() {
            return Err(ReportError::DecodeFailure(format!(
                "expected {} samples for {}x{} RGB, got {}",
                image.expected_len(),
                width,
                height,
                image.data.len()
            )));
        }
        Ok(image)
    }

    /// Image filled with a single colour.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgb.repeat(pixels),
        }
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(RGB_CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
    }

    pub(crate) fn is_consistent(&self) -> bool {
        self.data.len() == self.expected_len()
    }

    fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * RGB_CHANNELS
    }
}

impl From<image::RgbImage> for DecodedImage {
    fn from(rgb: image::RgbImage) -> Self {
        let (width, height) = rgb.dimensions();
        Self {
            width,
            height,
            data: rgb.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_short_buffer() {
        let result = DecodedImage::new(2, 2, vec![0u8; 11]);
        assert!(matches!(result, Err(ReportError::DecodeFailure(_))));
    }

    #[test]
    fn filled_repeats_colour() {
        let image = DecodedImage::filled(3, 2, [1, 2, 3]);
        assert_eq!(image.pixel_count(), 6);
        assert!(image.pixels().all(|px| px == [1, 2, 3]));
    }

    #[test]
    fn from_rgb_image_keeps_layout() {
        let mut rgb = image::RgbImage::new(2, 1);
        rgb.put_pixel(1, 0, image::Rgb([9, 8, 7]));
        let decoded = DecodedImage::from(rgb);
        assert_eq!((decoded.width, decoded.height), (2, 1));
        assert_eq!(decoded.data, vec![0, 0, 0, 9, 8, 7]);
    }
}
