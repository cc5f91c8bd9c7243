//! pixpress - single image resize / recompress / ICO conversion
//!
//! Results are written under `output/<category>/` (see `--output-root`).

use anyhow::Result;
use clap::{ArgAction, Parser};
use pixpress::{EncodeOptions, Options};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixpress")]
#[command(about = "Resize, recompress or convert a single image to ICO")]
#[command(version)]
struct Cli {
    /// Input image file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output image file name (default: input name with operation suffixes)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resize percentage (1-99). 0 means no resize
    #[arg(short, long, default_value_t = 0)]
    resize: u32,

    /// Compression level (1-100, 1 is max compression, 100 is best quality). 0 means none
    #[arg(short, long, default_value_t = 0)]
    compress: u32,

    /// Convert the image to ICO format
    #[arg(long)]
    to_ico: bool,

    /// Automatically resize images larger than 256x256 when converting to ICO
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    auto_resize_ico: bool,

    /// Convert to RGBA before embedding in the ICO
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    ico_rgba: bool,

    /// Root directory for categorized output
    #[arg(long, default_value = pixpress::options::DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options {
            input: cli.input,
            output: cli.output,
            resize: cli.resize,
            compress: cli.compress,
            to_ico: cli.to_ico,
            ico: EncodeOptions {
                auto_downscale: cli.auto_resize_ico,
                normalize_rgba: cli.ico_rgba,
            },
            output_root: cli.output_root,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = Options::from(Cli::parse());
    pixpress::run(&options)?;

    Ok(())
}
