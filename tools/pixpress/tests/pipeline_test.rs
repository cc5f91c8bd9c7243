//! Integration tests for pixpress
//!
//! Tests the full pipeline: generate an input image -> run -> verify output

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use pixpress::{Options, OptionsError};
use pixpress_ico::IconContainer;
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
    })
    .save_with_format(path, ImageFormat::Png)
    .expect("Failed to write test PNG");
}

fn write_jpeg(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x * 3) as u8, (y * 3) as u8, 90]))
        .save_with_format(path, ImageFormat::Jpeg)
        .expect("Failed to write test JPEG");
}

fn options(input: PathBuf, root: &Path) -> Options {
    let mut options = Options::new(input);
    options.output_root = root.to_path_buf();
    options
}

/// PNG -> ICO lands in transform/ with a valid container
#[test]
fn test_png_to_ico() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("logo.png");
    write_png(&input, 64, 32);

    let mut opts = options(input, &dir.path().join("out"));
    opts.to_ico = true;
    let written = pixpress::run(&opts).unwrap();

    assert_eq!(written, dir.path().join("out/transform/logo.ico"));
    let bytes = std::fs::read(&written).unwrap();
    let ico = IconContainer::parse(&bytes).unwrap();
    assert_eq!((ico.entry.width, ico.entry.height), (64, 32));
    assert_eq!(bytes.len(), 22 + ico.entry.size as usize);

    let embedded = image::load_from_memory_with_format(ico.resource, ImageFormat::Png).unwrap();
    assert_eq!(embedded.dimensions(), (64, 32));
}

/// Large input is downscaled to fit the directory entry
#[test]
fn test_large_png_to_ico_auto_resize() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("big.png");
    write_png(&input, 600, 300);

    let mut opts = options(input, dir.path());
    opts.to_ico = true;
    opts.output = Some(PathBuf::from("app"));
    let written = pixpress::run(&opts).unwrap();

    assert_eq!(written, dir.path().join("transform/app.ico"));
    let bytes = std::fs::read(&written).unwrap();
    let ico = IconContainer::parse(&bytes).unwrap();
    assert_eq!((ico.entry.width, ico.entry.height), (0, 128));
}

/// Without auto-resize the oversized pixels are kept, width byte still 0
#[test]
fn test_large_png_to_ico_no_auto_resize() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wide.png");
    write_png(&input, 300, 150);

    let mut opts = options(input, dir.path());
    opts.to_ico = true;
    opts.ico.auto_downscale = false;
    let bytes = std::fs::read(pixpress::run(&opts).unwrap()).unwrap();

    let ico = IconContainer::parse(&bytes).unwrap();
    assert_eq!((ico.entry.width, ico.entry.height), (0, 150));
    let embedded = image::load_from_memory_with_format(ico.resource, ImageFormat::Png).unwrap();
    assert_eq!(embedded.dimensions(), (300, 150));
}

/// Percent resize happens before ICO conversion
#[test]
fn test_resize_then_ico() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("icon.png");
    write_png(&input, 100, 60);

    let mut opts = options(input, dir.path());
    opts.to_ico = true;
    opts.resize = 50;
    let written = pixpress::run(&opts).unwrap();

    assert_eq!(written, dir.path().join("transform/icon_r50.ico"));
    let bytes = std::fs::read(&written).unwrap();
    let ico = IconContainer::parse(&bytes).unwrap();
    assert_eq!((ico.entry.width, ico.entry.height), (50, 30));
}

/// JPEG with a compression level stays JPEG in compress/
#[test]
fn test_jpeg_compress() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("photo.jpg");
    write_jpeg(&input, 40, 30);

    let mut opts = options(input, dir.path());
    opts.compress = 20;
    let written = pixpress::run(&opts).unwrap();

    assert_eq!(written, dir.path().join("compress/photo_c20.jpg"));
    let bytes = std::fs::read(&written).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (40, 30));
}

/// PNG resize keeps the PNG format and halves dimensions
#[test]
fn test_png_resize() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("shot.png");
    write_png(&input, 80, 40);

    let mut opts = options(input, dir.path());
    opts.resize = 50;
    opts.compress = 10;
    let written = pixpress::run(&opts).unwrap();

    assert_eq!(written, dir.path().join("resize/shot_r50_c10.png"));
    let decoded: DynamicImage = image::open(&written).unwrap();
    assert_eq!(decoded.dimensions(), (40, 20));
}

/// Format is detected from content, not from the extension
#[test]
fn test_format_detected_from_content() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mislabeled.jpg");
    write_png(&input, 8, 8);

    let opts = options(input, dir.path());
    let written = pixpress::run(&opts).unwrap();

    assert_eq!(written, dir.path().join("processed/mislabeled.jpg"));
    let bytes = std::fs::read(&written).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
}

/// Validation errors surface without creating output
#[test]
fn test_invalid_options() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_png(&input, 4, 4);

    let mut opts = options(input, &dir.path().join("out"));
    opts.compress = 150;
    let err = pixpress::run(&opts).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<OptionsError>(),
        Some(OptionsError::CompressOutOfRange(150))
    ));
    assert!(!dir.path().join("out").exists());

    let missing = options(dir.path().join("missing.png"), dir.path());
    let err = pixpress::run(&missing).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<OptionsError>(),
        Some(OptionsError::InputMissing(_))
    ));
}

/// Undecodable input is an error, not a panic
#[test]
fn test_garbage_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("junk.png");
    std::fs::write(&input, b"definitely not an image").unwrap();

    let opts = options(input, dir.path());
    let err = pixpress::run(&opts).unwrap_err();
    assert!(format!("{:#}", err).contains("Error decoding image"));
}
