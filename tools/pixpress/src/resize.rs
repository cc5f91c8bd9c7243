//! Percentage resize

use image::DynamicImage;
use image::imageops::FilterType;

/// Target size for a percentage resize (truncating, at least 1 pixel per axis)
pub fn scaled_dimensions(width: u32, height: u32, percent: u32) -> (u32, u32) {
    let scale = |side: u32| ((side as u64 * percent as u64) / 100).max(1) as u32;
    (scale(width), scale(height))
}

/// Resize `img` to `percent`% of its size with Lanczos3. 0 leaves it untouched.
pub fn resize_by_percent(img: DynamicImage, percent: u32) -> DynamicImage {
    if percent == 0 {
        return img;
    }

    let (width, height) = scaled_dimensions(img.width(), img.height(), percent);
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    tracing::info!(
        "Image resized to {}% ({}x{} pixels)",
        percent,
        width,
        height
    );
    resized
}
