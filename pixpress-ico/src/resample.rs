//! Auto-downscale for oversized icon sources

use std::borrow::Cow;

use image::DynamicImage;
use image::imageops::FilterType;

/// Compute the size an image must be resampled to so neither side exceeds `max`.
///
/// Returns `None` when the image already fits. Otherwise the longer side is
/// clamped to exactly `max` and the shorter side scaled by the same ratio,
/// rounded, never below 1 pixel.
pub fn downscale_dimensions(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width <= max && height <= max {
        return None;
    }

    let scale = |side: u32, longer: u32| -> u32 {
        let scaled = (side as f64 * max as f64 / longer as f64).round() as u32;
        scaled.clamp(1, max)
    };

    let (new_width, new_height) = if width > height {
        (max, scale(height, width))
    } else {
        (scale(width, height), max)
    };

    Some((new_width, new_height))
}

/// Resample `img` with Lanczos3 so it fits within `max` x `max`.
///
/// Borrows the input unchanged when no resize is needed.
pub fn fit_within(img: &DynamicImage, max: u32) -> Cow<'_, DynamicImage> {
    let (width, height) = (img.width(), img.height());

    match downscale_dimensions(width, height, max) {
        None => Cow::Borrowed(img),
        Some((new_width, new_height)) => {
            let resized = img.resize_exact(new_width, new_height, FilterType::Lanczos3);
            tracing::info!(
                "Image resized for ICO format: {}x{} -> {}x{}",
                width,
                height,
                new_width,
                new_height
            );
            Cow::Owned(resized)
        }
    }
}
