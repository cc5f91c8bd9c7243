//! Output path bookkeeping
//!
//! Results land in `<root>/<category>/`, where the category reflects the most
//! significant operation that ran.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Output subdirectory chosen by which operations ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCategory {
    Transform,
    Resize,
    Compress,
    Processed,
}

impl OutputCategory {
    /// ICO conversion wins over resize, resize over compress
    pub fn determine(resize: u32, compress: u32, to_ico: bool) -> Self {
        if to_ico {
            OutputCategory::Transform
        } else if resize > 0 {
            OutputCategory::Resize
        } else if compress > 0 {
            OutputCategory::Compress
        } else {
            OutputCategory::Processed
        }
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            OutputCategory::Transform => "transform",
            OutputCategory::Resize => "resize",
            OutputCategory::Compress => "compress",
            OutputCategory::Processed => "processed",
        }
    }
}

impl fmt::Display for OutputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Compute the output path without touching the filesystem.
///
/// With an explicit `output` only its file name is kept (plus `.ico` when
/// converting and it is missing). Otherwise the input stem gets `_r{resize}`
/// and `_c{compress}` suffixes and keeps its extension, or switches to `.ico`.
pub fn plan_output_path(
    root: &Path,
    input: &Path,
    output: Option<&Path>,
    resize: u32,
    compress: u32,
    to_ico: bool,
) -> Result<PathBuf> {
    let category = OutputCategory::determine(resize, compress, to_ico);
    let dir = root.join(category.dir_name());

    let filename = match output {
        Some(output) => {
            let mut filename = output
                .file_name()
                .with_context(|| format!("Output path has no file name: {:?}", output))?
                .to_os_string();
            if to_ico && !has_ico_suffix(&filename) {
                filename.push(".ico");
            }
            filename
        }
        None => {
            let mut filename = input
                .file_stem()
                .with_context(|| format!("Input path has no file name: {:?}", input))?
                .to_os_string();
            if resize > 0 {
                filename.push(format!("_r{}", resize));
            }
            if compress > 0 {
                filename.push(format!("_c{}", compress));
            }

            if to_ico {
                filename.push(".ico");
            } else if let Some(ext) = input.extension() {
                filename.push(".");
                filename.push(ext);
            }
            filename
        }
    };

    Ok(dir.join(filename))
}

/// Case-insensitive `.ico` suffix check that leaves non-UTF-8 names intact
fn has_ico_suffix(name: &OsStr) -> bool {
    name.as_encoded_bytes().to_ascii_lowercase().ends_with(b".ico")
}

/// Compute the output path and create its directory
pub fn output_path(
    root: &Path,
    input: &Path,
    output: Option<&Path>,
    resize: u32,
    compress: u32,
    to_ico: bool,
) -> Result<PathBuf> {
    let path = plan_output_path(root, input, output, resize, compress, to_ico)?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Error creating output directory: {:?}", dir))?;
    }

    Ok(path)
}
