//! Re-encoding in the source format (JPEG quality / PNG compression)

use std::io::Write;

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};

/// JPEG quality used when no compression level is requested
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Format the input was decoded from, which decides the output encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    /// Anything else is written as a default PNG
    Other,
}

impl SourceFormat {
    pub fn from_image_format(format: Option<ImageFormat>) -> Self {
        match format {
            Some(ImageFormat::Jpeg) => SourceFormat::Jpeg,
            Some(ImageFormat::Png) => SourceFormat::Png,
            _ => SourceFormat::Other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "jpeg",
            SourceFormat::Png => "png",
            SourceFormat::Other => "unknown",
        }
    }
}

/// Map a 1-100 compression level (1 = smallest file) to a zlib level 0-9
/// (9 = smallest file).
pub fn png_zlib_level(compress: u32) -> u32 {
    let compress = compress.min(100);
    9 - (compress * 9 / 100)
}

/// PNG encoder setting for a compression level (0 = encoder default)
pub fn png_compression(compress: u32) -> CompressionType {
    if compress == 0 {
        return CompressionType::Default;
    }
    match png_zlib_level(compress) {
        0 => CompressionType::Uncompressed,
        level => CompressionType::Level(level as u8),
    }
}

/// JPEG quality for a compression level (0 = default quality)
pub fn jpeg_quality(compress: u32) -> u8 {
    if compress == 0 {
        DEFAULT_JPEG_QUALITY
    } else {
        compress.clamp(1, 100) as u8
    }
}

/// Encode `img` to `w` in `format`, applying the compression level if non-zero
pub fn encode_image<W: Write>(
    w: &mut W,
    img: &DynamicImage,
    format: SourceFormat,
    compress: u32,
) -> Result<()> {
    match format {
        SourceFormat::Jpeg => {
            let quality = jpeg_quality(compress);
            // JPEG has no alpha channel
            let rgb = img.to_rgb8();
            JpegEncoder::new_with_quality(w, quality)
                .write_image(
                    rgb.as_raw(),
                    rgb.width(),
                    rgb.height(),
                    ExtendedColorType::Rgb8,
                )
                .context("Failed to encode JPEG")?;

            if compress > 0 {
                tracing::info!("Image compressed with quality level {}", quality);
            }
        }

        SourceFormat::Png => {
            let compression = png_compression(compress);
            write_png(w, img, compression).context("Failed to encode PNG")?;

            if compress > 0 {
                tracing::info!(
                    "Image compressed with PNG compression level {} ({:?})",
                    png_zlib_level(compress),
                    compression
                );
            }
        }

        SourceFormat::Other => {
            write_png(w, img, CompressionType::Default).context("Failed to encode as PNG")?;
        }
    }

    Ok(())
}

fn write_png<W: Write>(
    w: &mut W,
    img: &DynamicImage,
    compression: CompressionType,
) -> image::ImageResult<()> {
    PngEncoder::new_with_quality(w, compression, FilterType::Adaptive).write_image(
        img.as_bytes(),
        img.width(),
        img.height(),
        img.color().into(),
    )
}
