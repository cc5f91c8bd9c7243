//! Icon container encoder

use std::borrow::Cow;
use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use crate::resample::fit_within;
use crate::{ICO_MAX_DIMENSION, IcoError, IconDirEntry, IconDirHeader};

/// Optional stages of the encode pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Downscale images larger than 256 on either side before embedding
    pub auto_downscale: bool,
    /// Convert to RGBA8 before PNG encoding (otherwise keep the source color type).
    ///
    /// The directory entry always declares 32 bits per pixel. With this off, an
    /// RGB, grey or 16-bit source is embedded as such and the entry's bit depth
    /// no longer matches the PNG; readers take the real format from the PNG header.
    pub normalize_rgba: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            auto_downscale: true,
            normalize_rgba: true,
        }
    }
}

/// What was actually embedded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoSummary {
    pub width: u32,
    pub height: u32,
    pub resource_size: u32,
}

/// Encode `img` as a single-image icon container and write it to `w`.
///
/// Writes the header, the directory entry and the PNG bytes in that order.
/// On a write error the sink may hold a partial container; discarding it is
/// up to the caller.
pub fn encode_ico<W: Write>(
    w: &mut W,
    img: &DynamicImage,
    options: EncodeOptions,
) -> Result<IcoSummary, IcoError> {
    let img = if options.auto_downscale {
        fit_within(img, ICO_MAX_DIMENSION)
    } else {
        Cow::Borrowed(img)
    };

    let (width, height) = (img.width(), img.height());
    let png = encode_png(&img, options.normalize_rgba)?;
    let resource_size =
        u32::try_from(png.len()).map_err(|_| IcoError::ResourceTooLarge(png.len()))?;

    let header = IconDirHeader::new(1);
    let entry = IconDirEntry::for_png(width, height, resource_size);

    w.write_all(&header.to_bytes())
        .map_err(IcoError::write("header"))?;
    w.write_all(&entry.to_bytes())
        .map_err(IcoError::write("directory entry"))?;
    w.write_all(&png).map_err(IcoError::write("image data"))?;

    tracing::debug!(
        "Encoded ICO: {}x{} (entry {}x{}), {} byte PNG",
        width,
        height,
        entry.width,
        entry.height,
        resource_size
    );

    Ok(IcoSummary {
        width,
        height,
        resource_size,
    })
}

/// Encode `img` as a single-image icon container in memory
pub fn encode_ico_to_vec(img: &DynamicImage, options: EncodeOptions) -> Result<Vec<u8>, IcoError> {
    let mut bytes = Vec::new();
    encode_ico(&mut bytes, img, options)?;
    Ok(bytes)
}

/// PNG-encode with best compression to keep the container small
fn encode_png(img: &DynamicImage, normalize_rgba: bool) -> Result<Vec<u8>, IcoError> {
    let mut png = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut png, CompressionType::Best, FilterType::Adaptive);

    let result = if normalize_rgba {
        let rgba = match img {
            DynamicImage::ImageRgba8(rgba) => Cow::Borrowed(rgba),
            other => Cow::Owned(other.to_rgba8()),
        };
        encoder.write_image(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            ExtendedColorType::Rgba8,
        )
    } else {
        encoder.write_image(img.as_bytes(), img.width(), img.height(), img.color().into())
    };

    result.map_err(IcoError::Encode)?;
    Ok(png)
}
