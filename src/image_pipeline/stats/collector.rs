use tracing::debug;

use crate::image_pipeline::capture::DecodedImage;
use crate::image_pipeline::common::error::{ReportError, Result};
use crate::image_pipeline::stats::types::ChannelAverages;

/// Averages each channel over every pixel of `image`.
///
/// Sums are accumulated in `u64` so even very large captures cannot overflow,
/// and the mean is truncated toward zero. An image without pixels, or whose
/// sample buffer does not match its dimensions, is reported as a
/// `DecodeFailure` before any division happens.
pub fn collect_channel_averages(image: &DecodedImage) -> Result<ChannelAverages> {
    let pixel_count = image.pixel_count();
    if pixel_count == 0 {
        return Err(ReportError::DecodeFailure(format!(
            "image has no pixels ({}x{})",
            image.width, image.height
        )));
    }
    if !image.is_consistent() {
        return Err(ReportError::DecodeFailure(format!(
            "{} samples do not describe a {}x{} RGB image",
            image.data.len(),
            image.width,
            image.height
        )));
    }

    let mut totals = [0u64; 3];
    for [r, g, b] in image.pixels() {
        totals[0] += u64::from(r);
        totals[1] += u64::from(g);
        totals[2] += u64::from(b);
    }

    // Each mean is at most 255, so the narrowing cannot truncate.
    let [red, green, blue] = totals.map(|sum| (sum / pixel_count) as u8);
    let averages = ChannelAverages::new(red, green, blue);

    debug!(pixels = pixel_count, %averages, "Collected channel averages");
    Ok(averages)
}
