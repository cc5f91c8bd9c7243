//! Single-image pipeline: decode -> resize -> (ICO | re-encode) -> write

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use pixpress_ico::{ICO_MAX_DIMENSION, encode_ico};

use crate::encode::{SourceFormat, encode_image};
use crate::options::Options;
use crate::output::output_path;
use crate::resize::resize_by_percent;

/// Decode an image, detecting its format from the file contents
pub fn load_image(path: &Path) -> Result<(DynamicImage, SourceFormat)> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Error opening input file: {:?}", path))?
        .with_guessed_format()
        .with_context(|| format!("Error reading input file: {:?}", path))?;

    let format = SourceFormat::from_image_format(reader.format());
    let img = reader
        .decode()
        .with_context(|| format!("Error decoding image: {:?}", path))?;

    Ok((img, format))
}

/// Colour layout embedded in the ICO, for log output
fn ico_color_label(options: &Options) -> &'static str {
    if options.ico.normalize_rgba {
        "RGBA"
    } else {
        "source color type"
    }
}

/// Run one conversion and return the path written
pub fn run(options: &Options) -> Result<PathBuf> {
    options.validate()?;

    let (img, format) = load_image(&options.input)?;
    tracing::info!(
        "Loaded {} image: {}x{}",
        format.name(),
        img.width(),
        img.height()
    );

    let img = resize_by_percent(img, options.resize);

    let out_path = output_path(
        &options.output_root,
        &options.input,
        options.output.as_deref(),
        options.resize,
        options.compress,
        options.to_ico,
    )?;

    let file = File::create(&out_path)
        .with_context(|| format!("Error creating output file: {:?}", out_path))?;
    let mut writer = BufWriter::new(file);

    if options.to_ico {
        if (img.width() > ICO_MAX_DIMENSION || img.height() > ICO_MAX_DIMENSION)
            && !options.ico.auto_downscale
        {
            tracing::warn!(
                "Large image dimensions ({}x{}) may not display properly in all ICO viewers. \
                 Consider using --auto-resize-ico true",
                img.width(),
                img.height()
            );
        }

        let summary =
            encode_ico(&mut writer, &img, options.ico).context("Error encoding to ICO format")?;
        writer
            .flush()
            .with_context(|| format!("Error writing output file: {:?}", out_path))?;

        tracing::info!(
            "Image converted to ICO format ({}x{} {}, {} byte PNG) and saved to {:?}",
            summary.width,
            summary.height,
            ico_color_label(options),
            summary.resource_size,
            out_path
        );
    } else {
        encode_image(&mut writer, &img, format, options.compress)
            .context("Error encoding output image")?;
        writer
            .flush()
            .with_context(|| format!("Error writing output file: {:?}", out_path))?;

        tracing::info!("Processed image saved to {:?}", out_path);
    }

    Ok(out_path)
}
